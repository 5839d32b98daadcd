use crate::config::ClientConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use ipma_controller::service::QueryResult;
use ipma_controller::{QueryError, QueryService};
use ipma_types::agriculture::{AgriculturalRecord, WaterQualityZone};
use ipma_types::dashboard::ServiceHealth;
use ipma_types::forecast::{DailyForecast, DistrictList, Location};
use ipma_types::marine::{FireRisk, SeaState, UvIndex};
use ipma_types::seismic::SeismicEvent;
use ipma_types::station::{StationObservation, WeatherStation};
use ipma_types::warning::WeatherWarning;
use ipma_types::{AgriculturalType, DashboardEnvelope, Region};
use reqwest::Client;
use serde::de::DeserializeOwned;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query service talking to the provider over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQueryService {
    client: Client,
    base_url: String,
}

impl HttpQueryService {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, QueryError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("[IPMA] GET {} {:?}", url, query);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(QueryError::transport)?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("[IPMA] GET {}: status {}", url, status);
            return Err(QueryError::Transport(format!("{} returned {}", path, status)));
        }
        response.json::<T>().await.map_err(|e| {
            log::warn!("[IPMA] GET {}: undecodable body: {}", url, e);
            QueryError::transport(e)
        })
    }
}

fn optional(name: &'static str, value: Option<&str>) -> Vec<(&'static str, String)> {
    value
        .map(|v| vec![(name, v.to_string())])
        .unwrap_or_default()
}

#[async_trait(?Send)]
impl QueryService for HttpQueryService {
    async fn health(&self) -> Result<ServiceHealth, QueryError> {
        self.get("/health", &[]).await
    }

    async fn api_info(&self) -> Result<serde_json::Value, QueryError> {
        self.get("/", &[]).await
    }

    async fn dashboard(&self) -> Result<DashboardEnvelope, QueryError> {
        self.get("/dashboard", &[]).await
    }

    async fn districts(&self) -> QueryResult<DistrictList> {
        self.get("/forecast/", &[]).await
    }

    async fn locations(&self, district: &str) -> QueryResult<Vec<Location>> {
        self.get(&format!("/forecast/{}", district), &[]).await
    }

    async fn current_forecast(&self, district: &str, location: &str) -> QueryResult<DailyForecast> {
        self.get(&format!("/forecast/{}/{}", district, location), &[])
            .await
    }

    async fn forecast_by_date(
        &self,
        district: &str,
        location: &str,
        date: NaiveDate,
    ) -> QueryResult<DailyForecast> {
        self.get(
            &format!("/forecast/{}/{}/", district, location),
            &[("day", date.format(DATE_FORMAT).to_string())],
        )
        .await
    }

    async fn warnings(&self) -> QueryResult<Vec<WeatherWarning>> {
        self.get("/warnings/", &[]).await
    }

    async fn warnings_by_level(&self, level: &str) -> QueryResult<Vec<WeatherWarning>> {
        self.get(&format!("/warnings/by-level/{}", level), &[]).await
    }

    async fn seismic(&self, region: Region) -> QueryResult<Vec<SeismicEvent>> {
        self.get("/seismic/", &[("region", region.to_string())]).await
    }

    async fn seismic_by_magnitude(
        &self,
        min_magnitude: f64,
        region: Region,
    ) -> QueryResult<Vec<SeismicEvent>> {
        self.get(
            &format!("/seismic/magnitude/{}", min_magnitude),
            &[("region", region.to_string())],
        )
        .await
    }

    async fn sea_state(&self) -> QueryResult<Vec<SeaState>> {
        self.get("/marine/sea-state", &[]).await
    }

    async fn fire_risk(&self) -> QueryResult<Vec<FireRisk>> {
        self.get("/marine/fire-risk", &[]).await
    }

    async fn fire_risk_by_level(&self, min_level: i64) -> QueryResult<Vec<FireRisk>> {
        self.get(&format!("/marine/fire-risk/level/{}", min_level), &[])
            .await
    }

    async fn uv_index(&self) -> QueryResult<Vec<UvIndex>> {
        self.get("/marine/uv-index", &[]).await
    }

    async fn uv_by_level(&self, level: &str) -> QueryResult<Vec<UvIndex>> {
        self.get(&format!("/marine/uv-index/level/{}", level), &[])
            .await
    }

    async fn stations(&self) -> QueryResult<Vec<WeatherStation>> {
        self.get("/stations/", &[]).await
    }

    async fn station_observations(
        &self,
        station_id: Option<&str>,
    ) -> QueryResult<Vec<StationObservation>> {
        self.get(
            "/stations/observations",
            &optional("station_id", station_id),
        )
        .await
    }

    async fn latest_observations(&self) -> QueryResult<Vec<StationObservation>> {
        self.get("/stations/observations/latest", &[]).await
    }

    async fn agricultural(
        &self,
        kind: AgriculturalType,
        municipality: Option<&str>,
    ) -> QueryResult<Vec<AgriculturalRecord>> {
        self.get(
            &format!("/agriculture/{}", kind.endpoint()),
            &optional("municipality", municipality),
        )
        .await
    }

    async fn water_quality(&self) -> QueryResult<Vec<WaterQualityZone>> {
        self.get("/agriculture/water-quality", &[]).await
    }

    async fn water_quality_by_status(&self, status: &str) -> QueryResult<Vec<WaterQualityZone>> {
        self.get(&format!("/agriculture/water-quality/status/{}", status), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    type Params = Query<HashMap<String, String>>;

    async fn districts() -> Json<Value> {
        Json(json!({
            "success": true,
            "data": {"districts": ["aveiro", "beja", "braga"], "total": 3}
        }))
    }

    async fn forecast_by_day(
        Path((district, location)): Path<(String, String)>,
        Query(params): Params,
    ) -> Json<Value> {
        Json(json!({
            "success": true,
            "data": {
                "date": params.get("day").cloned().unwrap_or_default(),
                "location": location,
                "district": district,
                "hourly_forecasts": []
            }
        }))
    }

    async fn seismic(Query(params): Params) -> Json<Value> {
        Json(json!({
            "success": true,
            "data": [{
                "id": "e1",
                "magnitude": 2.4,
                "depth": 12.0,
                "location": params.get("region").cloned().unwrap_or_default(),
                "time": "2024-06-01T03:12:00",
                "coordinates": {"latitude": 38.5, "longitude": -28.0}
            }]
        }))
    }

    async fn temperature_min(Query(params): Params) -> Json<Value> {
        Json(json!({
            "success": true,
            "data": [{
                "date": "2024-06-01",
                "municipality": params.get("municipality").cloned().unwrap_or_default(),
                "min_temperature": 11.5
            }]
        }))
    }

    async fn uv_failure() -> Json<Value> {
        Json(json!({"success": false, "message": "Dados UV indisponíveis"}))
    }

    async fn broken_warnings() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    async fn garbled_health() -> &'static str {
        "not json"
    }

    async fn spawn_provider() -> anyhow::Result<HttpQueryService> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new()
            .route("/forecast/", get(districts))
            .route("/forecast/:district/:location/", get(forecast_by_day))
            .route("/seismic/", get(seismic))
            .route("/agriculture/temperature-min", get(temperature_min))
            .route("/marine/uv-index", get(uv_failure))
            .route("/warnings/", get(broken_warnings))
            .route("/health", get(garbled_health));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        let config = ClientConfig::new(format!("http://{addr}"), 5);
        Ok(HttpQueryService::new(&config)?)
    }

    #[tokio::test]
    async fn test_districts_are_decoded() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let envelope = service.districts().await?;
        let list = envelope.data.unwrap();
        assert_eq!(list.total, 3);
        assert_eq!(list.districts[1], "beja");
        Ok(())
    }

    #[tokio::test]
    async fn test_forecast_by_date_sends_day_parameter() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let forecast = service
            .forecast_by_date("lisboa", "sintra", date)
            .await?
            .data
            .unwrap();
        assert_eq!(forecast.date, "2024-06-03");
        assert_eq!(forecast.district, "lisboa");
        assert_eq!(forecast.location, "sintra");
        Ok(())
    }

    #[tokio::test]
    async fn test_seismic_sends_region() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let events = service.seismic(Region::Acores).await?.data.unwrap();
        assert_eq!(events[0].location, "acores");
        Ok(())
    }

    #[tokio::test]
    async fn test_agricultural_series_uses_endpoint_path() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let records = service
            .agricultural(AgriculturalType::TemperatureMin, Some("Évora"))
            .await?
            .data
            .unwrap();
        assert_eq!(records[0].municipality, "Évora");
        assert_eq!(records[0].min_temperature, Some(11.5));
        assert_eq!(records[0].precipitation, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_envelope_failure_is_returned_as_is() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let envelope = service.uv_index().await?;
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Dados UV indisponíveis"));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_transport_failure() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        let err = service.warnings().await.unwrap_err();
        assert!(matches!(err, QueryError::Transport(ref m) if m.contains("500")));
        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_failure() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        assert!(matches!(service.health().await, Err(QueryError::Transport(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_is_transport_failure() -> anyhow::Result<()> {
        let service = spawn_provider().await?;
        assert!(matches!(service.sea_state().await, Err(QueryError::Transport(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_failure() -> anyhow::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        let service = HttpQueryService::new(&ClientConfig::new(format!("http://{addr}"), 2))?;
        assert!(matches!(service.stations().await, Err(QueryError::Transport(_))));
        Ok(())
    }
}
