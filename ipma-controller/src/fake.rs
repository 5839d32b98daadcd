//! Scripted in-memory [`QueryService`] for tests.
//!
//! Replies are JSON values keyed by operation name and decoded into the
//! operation's typed envelope. Queued replies are served first, in order;
//! after that the sticky reply set with [`FakeService::set`] is used.
//! A gated reply suspends the call until the test sends its value, which
//! lets tests choose the order in which concurrent calls complete.

use crate::error::QueryError;
use crate::service::{QueryResult, QueryService};
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::channel::oneshot;
use ipma_types::agriculture::{AgriculturalRecord, WaterQualityZone};
use ipma_types::dashboard::ServiceHealth;
use ipma_types::forecast::{DailyForecast, DistrictList, Location};
use ipma_types::marine::{FireRisk, SeaState, UvIndex};
use ipma_types::seismic::SeismicEvent;
use ipma_types::station::{StationObservation, WeatherStation};
use ipma_types::warning::WeatherWarning;
use ipma_types::{AgriculturalType, DashboardEnvelope, Region};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

pub enum Reply {
    Json(Value),
    Transport(String),
    Gated(oneshot::Receiver<Value>),
}

#[derive(Default)]
pub struct FakeService {
    calls: RefCell<Vec<String>>,
    queued: RefCell<HashMap<&'static str, VecDeque<Reply>>>,
    sticky: RefCell<HashMap<&'static str, Value>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply used whenever nothing is queued for `op`.
    pub fn set(&self, op: &'static str, value: Value) {
        self.sticky.borrow_mut().insert(op, value);
    }

    /// Queue a one-off reply for the next call of `op`.
    pub fn push(&self, op: &'static str, reply: Reply) {
        self.queued.borrow_mut().entry(op).or_default().push_back(reply);
    }

    /// Queue a reply that is held until the returned sender fires.
    pub fn gate(&self, op: &'static str) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.push(op, Reply::Gated(rx));
        tx
    }

    /// Every call made so far, with its arguments.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    async fn reply<T: DeserializeOwned>(
        &self,
        op: &'static str,
        call: String,
    ) -> Result<T, QueryError> {
        self.calls.borrow_mut().push(call);
        let queued = self
            .queued
            .borrow_mut()
            .get_mut(op)
            .and_then(VecDeque::pop_front);
        let value = match queued {
            Some(Reply::Json(value)) => value,
            Some(Reply::Transport(message)) => return Err(QueryError::Transport(message)),
            Some(Reply::Gated(rx)) => rx.await.map_err(QueryError::transport)?,
            None => {
                let sticky = self.sticky.borrow().get(op).cloned();
                sticky.ok_or_else(|| QueryError::Transport(format!("no reply for {}", op)))?
            }
        };
        serde_json::from_value(value).map_err(QueryError::transport)
    }
}

#[async_trait(?Send)]
impl QueryService for FakeService {
    async fn health(&self) -> Result<ServiceHealth, QueryError> {
        self.reply("health", "health".to_string()).await
    }

    async fn api_info(&self) -> Result<Value, QueryError> {
        self.reply("api_info", "api_info".to_string()).await
    }

    async fn dashboard(&self) -> Result<DashboardEnvelope, QueryError> {
        self.reply("dashboard", "dashboard".to_string()).await
    }

    async fn districts(&self) -> QueryResult<DistrictList> {
        self.reply("districts", "districts".to_string()).await
    }

    async fn locations(&self, district: &str) -> QueryResult<Vec<Location>> {
        self.reply("locations", format!("locations:{}", district)).await
    }

    async fn current_forecast(&self, district: &str, location: &str) -> QueryResult<DailyForecast> {
        self.reply("forecast", format!("forecast:{}/{}", district, location))
            .await
    }

    async fn forecast_by_date(
        &self,
        district: &str,
        location: &str,
        date: NaiveDate,
    ) -> QueryResult<DailyForecast> {
        self.reply(
            "forecast",
            format!("forecast:{}/{}@{}", district, location, date),
        )
        .await
    }

    async fn warnings(&self) -> QueryResult<Vec<WeatherWarning>> {
        self.reply("warnings", "warnings".to_string()).await
    }

    async fn warnings_by_level(&self, level: &str) -> QueryResult<Vec<WeatherWarning>> {
        self.reply("warnings", format!("warnings:{}", level)).await
    }

    async fn seismic(&self, region: Region) -> QueryResult<Vec<SeismicEvent>> {
        self.reply("seismic", format!("seismic:{}", region)).await
    }

    async fn seismic_by_magnitude(
        &self,
        min_magnitude: f64,
        region: Region,
    ) -> QueryResult<Vec<SeismicEvent>> {
        self.reply("seismic", format!("seismic:{}>={}", region, min_magnitude))
            .await
    }

    async fn sea_state(&self) -> QueryResult<Vec<SeaState>> {
        self.reply("sea_state", "sea_state".to_string()).await
    }

    async fn fire_risk(&self) -> QueryResult<Vec<FireRisk>> {
        self.reply("fire_risk", "fire_risk".to_string()).await
    }

    async fn fire_risk_by_level(&self, min_level: i64) -> QueryResult<Vec<FireRisk>> {
        self.reply("fire_risk", format!("fire_risk>={}", min_level)).await
    }

    async fn uv_index(&self) -> QueryResult<Vec<UvIndex>> {
        self.reply("uv_index", "uv_index".to_string()).await
    }

    async fn uv_by_level(&self, level: &str) -> QueryResult<Vec<UvIndex>> {
        self.reply("uv_index", format!("uv_index:{}", level)).await
    }

    async fn stations(&self) -> QueryResult<Vec<WeatherStation>> {
        self.reply("stations", "stations".to_string()).await
    }

    async fn station_observations(
        &self,
        station_id: Option<&str>,
    ) -> QueryResult<Vec<StationObservation>> {
        let call = match station_id {
            Some(id) => format!("observations:{}", id),
            None => "observations".to_string(),
        };
        self.reply("observations", call).await
    }

    async fn latest_observations(&self) -> QueryResult<Vec<StationObservation>> {
        self.reply("latest_observations", "latest_observations".to_string())
            .await
    }

    async fn agricultural(
        &self,
        kind: AgriculturalType,
        municipality: Option<&str>,
    ) -> QueryResult<Vec<AgriculturalRecord>> {
        let call = match municipality {
            Some(m) => format!("agricultural:{}:{}", kind, m),
            None => format!("agricultural:{}", kind),
        };
        self.reply("agricultural", call).await
    }

    async fn water_quality(&self) -> QueryResult<Vec<WaterQualityZone>> {
        self.reply("water_quality", "water_quality".to_string()).await
    }

    async fn water_quality_by_status(&self, status: &str) -> QueryResult<Vec<WaterQualityZone>> {
        self.reply("water_quality", format!("water_quality:{}", status))
            .await
    }
}
