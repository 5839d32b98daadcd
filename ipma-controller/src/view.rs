//! Render-time projections of the result cache.
//!
//! Nothing here is stored: every view is rebuilt from the raw cached
//! records on each call and borrows from them.

use crate::cache::ResultCache;
use ipma_classify::descriptor::SeverityDescriptor;
use ipma_classify::display::{
    agricultural_icon, format_agricultural_value, format_temperature, service_status_icon,
    warning_icon, warning_level, weather_icon, wind_arrow,
};
use ipma_classify::scales::{
    drought_index, fire_risk, seismic_magnitude, temperature_band, uv_level, water_status,
};
use ipma_types::agriculture::{AgriculturalRecord, WaterQualityZone};
use ipma_types::forecast::{DailyForecast, HourlyForecast};
use ipma_types::marine::{FireRisk, SeaState, UvIndex};
use ipma_types::seismic::SeismicEvent;
use ipma_types::station::{StationObservation, WeatherStation};
use ipma_types::warning::WeatherWarning;
use ipma_types::AgriculturalType;

pub const SEISMIC_LIST_LIMIT: usize = 10;
pub const FIRE_RISK_LIMIT: usize = 6;
pub const UV_LIMIT: usize = 6;
pub const SEA_STATE_LIMIT: usize = 4;
pub const OBSERVATION_LIMIT: usize = 8;
pub const STATION_LIMIT: usize = 12;
pub const AGRICULTURE_LIMIT: usize = 12;

/// A record paired with its display descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a, T> {
    pub item: &'a T,
    pub severity: SeverityDescriptor,
}

fn classify_all<'a, T>(
    items: Option<&'a Vec<T>>,
    limit: usize,
    classify: impl Fn(&T) -> SeverityDescriptor,
) -> Vec<Classified<'a, T>> {
    items
        .into_iter()
        .flatten()
        .take(limit)
        .map(|item| Classified {
            item,
            severity: classify(item),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeismicSummary<'a> {
    pub total: usize,
    pub highest_magnitude: Option<f64>,
    pub highest_severity: SeverityDescriptor,
    /// Strongest first, at most [`SEISMIC_LIST_LIMIT`].
    pub events: Vec<Classified<'a, SeismicEvent>>,
}

pub fn seismic_summary(cache: &ResultCache) -> SeismicSummary<'_> {
    let mut sorted: Vec<&SeismicEvent> = cache.seismic.events.iter().flatten().collect();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    let highest_magnitude = sorted.first().map(|e| e.magnitude);
    SeismicSummary {
        total: sorted.len(),
        highest_magnitude,
        highest_severity: seismic_magnitude(highest_magnitude),
        events: sorted
            .into_iter()
            .take(SEISMIC_LIST_LIMIT)
            .map(|item| Classified {
                item,
                severity: seismic_magnitude(Some(item.magnitude)),
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarinePanel<'a> {
    pub fire_risk: Vec<Classified<'a, FireRisk>>,
    pub uv_index: Vec<Classified<'a, UvIndex>>,
    pub sea_state: Vec<&'a SeaState>,
}

pub fn marine_panel(cache: &ResultCache) -> MarinePanel<'_> {
    MarinePanel {
        fire_risk: classify_all(cache.marine.fire_risk.as_ref(), FIRE_RISK_LIMIT, |r| {
            fire_risk(Some(r.risk_level))
        }),
        uv_index: classify_all(cache.marine.uv_index.as_ref(), UV_LIMIT, |u| {
            uv_level(Some(u.uv_level.as_str()))
        }),
        sea_state: cache
            .marine
            .sea_state
            .iter()
            .flatten()
            .take(SEA_STATE_LIMIT)
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow<'a> {
    pub observation: &'a StationObservation,
    pub temperature: String,
    pub temperature_band: SeverityDescriptor,
    pub wind_arrow: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationsPanel<'a> {
    pub observations: Vec<ObservationRow<'a>>,
    pub stations: Vec<&'a WeatherStation>,
}

pub fn stations_panel(cache: &ResultCache) -> StationsPanel<'_> {
    StationsPanel {
        observations: cache
            .stations
            .observations
            .iter()
            .flatten()
            .take(OBSERVATION_LIMIT)
            .map(|observation| ObservationRow {
                observation,
                temperature: format_temperature(observation.temperature),
                temperature_band: temperature_band(observation.temperature),
                wind_arrow: wind_arrow(observation.wind_direction.as_deref()),
            })
            .collect(),
        stations: cache
            .stations
            .stations
            .iter()
            .flatten()
            .take(STATION_LIMIT)
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgriculturalRow<'a> {
    pub record: &'a AgriculturalRecord,
    /// Reading of the panel's series, formatted with its unit.
    pub value: String,
    pub drought: SeverityDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgriculturePanel<'a> {
    pub kind: AgriculturalType,
    pub title: &'static str,
    pub icon: &'static str,
    pub records: Vec<AgriculturalRow<'a>>,
    pub water_quality: Vec<Classified<'a, WaterQualityZone>>,
}

/// The agricultural panel. Rows are formatted for the series the records
/// were loaded for, which may lag behind the selected filter while a
/// reload is outstanding.
pub fn agriculture_panel(cache: &ResultCache) -> AgriculturePanel<'_> {
    let kind = cache.agriculture.kind;
    AgriculturePanel {
        kind,
        title: kind.title(),
        icon: agricultural_icon(kind),
        records: cache
            .agriculture
            .records
            .iter()
            .flatten()
            .take(AGRICULTURE_LIMIT)
            .map(|record| AgriculturalRow {
                record,
                value: format_agricultural_value(kind, record.value_for(kind)),
                drought: drought_index(record.pdsi_index),
            })
            .collect(),
        water_quality: classify_all(
            cache.agriculture.water_quality.as_ref(),
            usize::MAX,
            |zone| water_status(Some(zone.status.as_str())),
        ),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarningRow<'a> {
    pub warning: &'a WeatherWarning,
    pub level: SeverityDescriptor,
    pub icon: &'static str,
}

pub fn warning_rows(cache: &ResultCache) -> Vec<WarningRow<'_>> {
    cache
        .warnings
        .iter()
        .flatten()
        .map(|warning| WarningRow {
            warning,
            level: warning_level(Some(warning.level.as_str())),
            icon: warning_icon(&warning.warning_type),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow<'a> {
    pub hour: &'a HourlyForecast,
    pub temperature: String,
    pub icon: &'static str,
    pub wind_arrow: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView<'a> {
    pub forecast: &'a DailyForecast,
    pub min_temperature: String,
    pub max_temperature: String,
    pub hours: Vec<HourRow<'a>>,
}

pub fn forecast_view(cache: &ResultCache) -> Option<ForecastView<'_>> {
    let forecast = cache.weather.forecast.as_ref()?;
    Some(ForecastView {
        forecast,
        min_temperature: format_temperature(forecast.min_temperature),
        max_temperature: format_temperature(forecast.max_temperature),
        hours: forecast
            .hourly_forecasts
            .iter()
            .map(|hour| HourRow {
                hour,
                temperature: format_temperature(Some(hour.temperature)),
                icon: weather_icon(&hour.weather_condition.description),
                wind_arrow: wind_arrow(hour.wind_direction.as_deref()),
            })
            .collect(),
    })
}

/// `(service, status, icon)` rows of the dashboard's service status map.
pub fn service_rows(cache: &ResultCache) -> Vec<(&str, &str, &'static str)> {
    cache
        .dashboard
        .data
        .iter()
        .flat_map(|data| data.service_status.iter())
        .map(|(name, status)| (name.as_str(), status.as_str(), service_status_icon(status)))
        .collect()
}
