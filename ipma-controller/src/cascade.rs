//! District → location → date selection chain for forecasts.
//!
//! Changing the district always drops the selected location, since
//! locations only exist within a district. The date is independent of both;
//! its [today, today+5] bounds are checked where the date is entered, not
//! here.

use crate::error::QueryError;
use chrono::NaiveDate;

pub const MISSING_SELECTION: &str = "Por favor selecione distrito e localidade";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCascade {
    district: Option<String>,
    location: Option<String>,
    date: Option<NaiveDate>,
}

/// A complete selection, ready to be sent as a forecast query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastTarget {
    pub district: String,
    pub location: String,
    pub date: Option<NaiveDate>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LocationCascade {
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Select a district. Returns `true` when the selection changed, in
    /// which case the location has been cleared.
    pub fn set_district(&mut self, district: Option<String>) -> bool {
        let district = non_empty(district);
        if district == self.district {
            return false;
        }
        self.district = district;
        self.location = None;
        true
    }

    /// Select a location; the date is left alone.
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = non_empty(location);
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// The forecast to fetch, or a validation error when district or
    /// location is missing.
    pub fn forecast_target(&self) -> Result<ForecastTarget, QueryError> {
        match (&self.district, &self.location) {
            (Some(district), Some(location)) => Ok(ForecastTarget {
                district: district.clone(),
                location: location.clone(),
                date: self.date,
            }),
            _ => Err(QueryError::Validation(MISSING_SELECTION.to_string())),
        }
    }
}
