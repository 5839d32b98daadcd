//! Shared utility functions for IPMA dashboard crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Duration, Local, NaiveDate};

    /// Forecasts are served for today and the following five days.
    pub const FORECAST_HORIZON_DAYS: i64 = 5;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Today's date in the local timezone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// First and last selectable forecast day, both inclusive.
    pub fn forecast_window(today: &NaiveDate) -> (NaiveDate, NaiveDate) {
        (*today, *today + Duration::days(FORECAST_HORIZON_DAYS))
    }

    /// Parse a forecast date and check it lies within the forecast window.
    pub fn parse_forecast_date(s: &str, today: &NaiveDate) -> anyhow::Result<NaiveDate> {
        let date = parse_date(s)?;
        let (first, last) = forecast_window(today);
        if date < first || date > last {
            return Err(DateError(format!(
                "{} is outside the forecast window {} to {}",
                format_date(&date),
                format_date(&first),
                format_date(&last)
            ))
            .into());
        }
        Ok(date)
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
