//! View state and its named transitions.
//!
//! Transitions are plain synchronous functions. The ones that require
//! data to be fetched return a [`Trigger`]; running it is the
//! controller's job.

use crate::cache::ResultCache;
use crate::cascade::LocationCascade;
use crate::catalog::QueryKind;
use crate::error::ErrorState;
use chrono::NaiveDate;
use ipma_types::{AgriculturalType, Category, Region};
use std::fmt;

/// User-selected filters. Filters of inactive categories are kept but
/// have no effect until their category is active again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Weather only.
    pub cascade: LocationCascade,
    /// Seismic only.
    pub region: Region,
    /// Agriculture only.
    pub agricultural_type: AgriculturalType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// Health has not been checked yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl ApiStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApiStatus::Unknown => "",
            ApiStatus::Online => "🟢 API Online",
            ApiStatus::Offline => "🔴 API Offline",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orchestration requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Run the query plan of a category.
    LoadCategory(Category),
    /// Reload the location list of a district.
    ReloadLocations(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub active: Category,
    pub filters: FilterState,
    pub cache: ResultCache,
    /// True while the most recent orchestration attempt is outstanding.
    pub loading: bool,
    pub error: Option<ErrorState>,
    pub api_status: ApiStatus,
}

impl ViewState {
    pub fn select_category(&mut self, category: Category) -> Option<Trigger> {
        if self.active == category {
            return None;
        }
        self.active = category;
        Some(Trigger::LoadCategory(category))
    }

    /// Region changes reload the active category, whichever it is.
    pub fn set_region(&mut self, region: Region) -> Option<Trigger> {
        if self.filters.region == region {
            return None;
        }
        self.filters.region = region;
        Some(Trigger::LoadCategory(self.active))
    }

    pub fn set_agricultural_type(&mut self, kind: AgriculturalType) -> Option<Trigger> {
        if self.filters.agricultural_type == kind {
            return None;
        }
        self.filters.agricultural_type = kind;
        Some(Trigger::LoadCategory(self.active))
    }

    /// Select a district. A change drops the location, the location list
    /// and the displayed forecast; the list is reloaded only while the
    /// weather category is active.
    pub fn set_district(&mut self, district: Option<String>) -> Option<Trigger> {
        if !self.filters.cascade.set_district(district) {
            return None;
        }
        self.cache.weather.locations = None;
        self.cache.weather.forecast = None;
        match self.filters.cascade.district() {
            Some(district) if self.active == Category::Weather => {
                Some(Trigger::ReloadLocations(district.to_string()))
            }
            _ => None,
        }
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.filters.cascade.set_location(location);
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.filters.cascade.set_date(date);
    }

    /// Error state for a failure in `category`, capturing the current
    /// filters.
    pub fn error_for(
        &self,
        category: Category,
        query: Option<QueryKind>,
        message: impl Into<String>,
    ) -> ErrorState {
        ErrorState {
            message: message.into(),
            category,
            query,
            filters: self.filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipma_types::forecast::DailyForecast;

    fn forecast() -> DailyForecast {
        DailyForecast {
            date: "2024-06-01".to_string(),
            location: "Sintra".to_string(),
            district: "lisboa".to_string(),
            hourly_forecasts: Vec::new(),
            min_temperature: Some(14.0),
            max_temperature: Some(24.5),
        }
    }

    fn weather_state() -> ViewState {
        let mut state = ViewState::default();
        state.select_category(Category::Weather);
        state.set_district(Some("lisboa".to_string()));
        state.set_location(Some("sintra".to_string()));
        state.cache.weather.forecast = Some(forecast());
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::default();
        assert_eq!(state.active, Category::Dashboard);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.api_status, ApiStatus::Unknown);
        assert_eq!(state.filters.region, Region::Continente);
        assert_eq!(state.filters.agricultural_type, AgriculturalType::Precipitation);
    }

    #[test]
    fn test_category_change_triggers_load() {
        let mut state = ViewState::default();
        assert_eq!(
            state.select_category(Category::Marine),
            Some(Trigger::LoadCategory(Category::Marine))
        );
        assert_eq!(state.select_category(Category::Marine), None);
        assert_eq!(
            state.select_category(Category::Dashboard),
            Some(Trigger::LoadCategory(Category::Dashboard))
        );
    }

    #[test]
    fn test_filter_changes_reload_active_category() {
        let mut state = ViewState::default();
        state.select_category(Category::Seismic);
        assert_eq!(
            state.set_region(Region::Acores),
            Some(Trigger::LoadCategory(Category::Seismic))
        );
        assert_eq!(state.set_region(Region::Acores), None);
        assert_eq!(
            state.set_agricultural_type(AgriculturalType::Pdsi),
            Some(Trigger::LoadCategory(Category::Seismic))
        );
        assert_eq!(state.set_agricultural_type(AgriculturalType::Pdsi), None);
    }

    #[test]
    fn test_district_change_resets_location_and_forecast() {
        let mut state = weather_state();
        let trigger = state.set_district(Some("porto".to_string()));
        assert_eq!(trigger, Some(Trigger::ReloadLocations("porto".to_string())));
        assert_eq!(state.filters.cascade.location(), None);
        assert_eq!(state.cache.weather.forecast, None);
    }

    #[test]
    fn test_district_change_outside_weather_does_not_reload() {
        let mut state = weather_state();
        state.select_category(Category::Warnings);
        assert_eq!(state.set_district(Some("faro".to_string())), None);
        assert_eq!(state.filters.cascade.location(), None);
        assert_eq!(state.cache.weather.forecast, None);
    }

    #[test]
    fn test_clearing_district_does_not_reload() {
        let mut state = weather_state();
        assert_eq!(state.set_district(None), None);
        assert_eq!(state.filters.cascade.district(), None);
        assert_eq!(state.cache.weather.forecast, None);
    }

    #[test]
    fn test_location_and_date_changes_trigger_nothing() {
        let mut state = weather_state();
        state.set_location(Some("cascais".to_string()));
        state.set_date(NaiveDate::from_ymd_opt(2024, 6, 2));
        assert_eq!(state.cache.weather.forecast, Some(forecast()));
        assert_eq!(state.filters.cascade.location(), Some("cascais"));
    }

    #[test]
    fn test_error_snapshot_keeps_filters() {
        let state = weather_state();
        let error = state.error_for(Category::Weather, None, "falhou");
        assert_eq!(error.filters.cascade.district(), Some("lisboa"));
        assert_eq!(error.filters.cascade.location(), Some("sintra"));
        assert_eq!(error.query, None);
    }

    #[test]
    fn test_api_status_label() {
        assert_eq!(ApiStatus::Online.to_string(), "🟢 API Online");
        assert_eq!(ApiStatus::Offline.to_string(), "🔴 API Offline");
    }
}
