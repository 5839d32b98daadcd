//! The boundary to the remote data provider.
//!
//! Every operation returns the provider's envelope untouched; the
//! controller only inspects `success` and `message`. Transport problems
//! (connection, timeout, HTTP status, decoding) come back as
//! [`QueryError::Transport`].

use crate::error::QueryError;
use async_trait::async_trait;
use chrono::NaiveDate;
use ipma_types::agriculture::{AgriculturalRecord, WaterQualityZone};
use ipma_types::dashboard::ServiceHealth;
use ipma_types::forecast::{DailyForecast, DistrictList, Location};
use ipma_types::marine::{FireRisk, SeaState, UvIndex};
use ipma_types::seismic::SeismicEvent;
use ipma_types::station::{StationObservation, WeatherStation};
use ipma_types::warning::WeatherWarning;
use ipma_types::{AgriculturalType, DashboardEnvelope, Envelope, Region};

pub type QueryResult<T> = Result<Envelope<T>, QueryError>;

/// Query operations offered by the data provider.
///
/// Futures are not required to be `Send`: the controller drives them on a
/// single execution context.
#[async_trait(?Send)]
pub trait QueryService {
    // ───────────────────── System ─────────────────────

    /// Flat health status, not wrapped in an envelope.
    async fn health(&self) -> Result<ServiceHealth, QueryError>;

    /// Free-form description of the API root.
    async fn api_info(&self) -> Result<serde_json::Value, QueryError>;

    async fn dashboard(&self) -> Result<DashboardEnvelope, QueryError>;

    // ───────────────────── Forecasts ─────────────────────

    async fn districts(&self) -> QueryResult<DistrictList>;

    async fn locations(&self, district: &str) -> QueryResult<Vec<Location>>;

    async fn current_forecast(&self, district: &str, location: &str) -> QueryResult<DailyForecast>;

    async fn forecast_by_date(
        &self,
        district: &str,
        location: &str,
        date: NaiveDate,
    ) -> QueryResult<DailyForecast>;

    // ───────────────────── Warnings ─────────────────────

    async fn warnings(&self) -> QueryResult<Vec<WeatherWarning>>;

    async fn warnings_by_level(&self, level: &str) -> QueryResult<Vec<WeatherWarning>>;

    // ───────────────────── Seismic ─────────────────────

    async fn seismic(&self, region: Region) -> QueryResult<Vec<SeismicEvent>>;

    async fn seismic_by_magnitude(
        &self,
        min_magnitude: f64,
        region: Region,
    ) -> QueryResult<Vec<SeismicEvent>>;

    // ───────────────────── Marine ─────────────────────

    async fn sea_state(&self) -> QueryResult<Vec<SeaState>>;

    async fn fire_risk(&self) -> QueryResult<Vec<FireRisk>>;

    async fn fire_risk_by_level(&self, min_level: i64) -> QueryResult<Vec<FireRisk>>;

    async fn uv_index(&self) -> QueryResult<Vec<UvIndex>>;

    async fn uv_by_level(&self, level: &str) -> QueryResult<Vec<UvIndex>>;

    // ───────────────────── Stations ─────────────────────

    async fn stations(&self) -> QueryResult<Vec<WeatherStation>>;

    async fn station_observations(
        &self,
        station_id: Option<&str>,
    ) -> QueryResult<Vec<StationObservation>>;

    async fn latest_observations(&self) -> QueryResult<Vec<StationObservation>>;

    // ───────────────────── Agriculture ─────────────────────

    /// One of the five agricultural series, optionally for a single
    /// municipality.
    async fn agricultural(
        &self,
        kind: AgriculturalType,
        municipality: Option<&str>,
    ) -> QueryResult<Vec<AgriculturalRecord>>;

    async fn water_quality(&self) -> QueryResult<Vec<WaterQualityZone>>;

    async fn water_quality_by_status(&self, status: &str) -> QueryResult<Vec<WaterQualityZone>>;
}
