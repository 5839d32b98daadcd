use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate overview served by the dashboard operation.
///
/// `service_status`, `coverage` and `data_freshness` are open-ended maps
/// from a service/area name to a free-form status string.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub api_status: String,
    pub version: String,
    pub last_update: String,
    pub data_summary: DataSummary,
    #[serde(default)]
    pub service_status: BTreeMap<String, String>,
    #[serde(default)]
    pub coverage: BTreeMap<String, String>,
    #[serde(default)]
    pub data_freshness: BTreeMap<String, String>,
}

#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DataSummary {
    pub districts_available: u32,
    pub active_warnings: u32,
    pub recent_seismic_events: u32,
    pub weather_stations: u32,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct QuickLinks {
    pub documentation: String,
    pub all_endpoints: String,
    pub health_check: String,
}

/// Flat status object returned by the health operation (not enveloped).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub message: String,
    pub version: String,
    #[serde(default)]
    pub services: Option<HealthServices>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HealthServices {
    pub ipma_connection: String,
    pub total_endpoints: String,
    pub cache_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dashboard_payload() {
        let json = r#"{
            "api_status": "🟢 Online",
            "version": "2.0.0",
            "last_update": "2024-06-01T10:00:00",
            "data_summary": {
                "districts_available": 20,
                "active_warnings": 3,
                "recent_seismic_events": 12,
                "weather_stations": 150
            },
            "service_status": {"meteorology": "🟢 Operacional", "seismic": "🔴 Offline"},
            "coverage": {"azores": "Completa"},
            "data_freshness": {"forecasts": "3h"}
        }"#;
        let dashboard: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.data_summary.active_warnings, 3);
        assert_eq!(dashboard.service_status.len(), 2);
        assert_eq!(dashboard.service_status["seismic"], "🔴 Offline");
    }

    #[test]
    fn test_health_is_healthy_only_for_exact_status() {
        let health: ServiceHealth = serde_json::from_str(
            r#"{"status": "healthy", "message": "ok", "version": "2.0.0"}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert!(health.services.is_none());

        let degraded = ServiceHealth {
            status: "degraded".to_string(),
            ..health
        };
        assert!(!degraded.is_healthy());
    }
}
