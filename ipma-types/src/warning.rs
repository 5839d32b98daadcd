use serde::{Deserialize, Serialize};

/// An active weather warning for an area.
///
/// `level` is one of the provider's colour tokens (`verde`, `amarelo`,
/// `laranja`, `vermelho`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherWarning {
    pub id: String,
    pub area: String,
    pub warning_type: String,
    pub level: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub phenomenon: String,
}
