use serde::{Deserialize, Serialize};

/// Sea conditions for a coastal area.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeaState {
    pub date: String,
    pub location: String,
    /// Metres
    #[serde(default)]
    pub wave_height: Option<f64>,
    /// Seconds
    #[serde(default)]
    pub wave_period: Option<f64>,
    #[serde(default)]
    pub wave_direction: Option<String>,
    /// Degrees Celsius
    #[serde(default)]
    pub sea_temperature: Option<f64>,
    #[serde(default)]
    pub coastal_conditions: Option<String>,
}

/// Daily fire risk for a municipality. `risk_level` runs from 1 (low) to 5
/// (maximum).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FireRisk {
    pub date: String,
    pub location: String,
    pub risk_level: i64,
    pub risk_description: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

/// UV forecast. `uv_level` is the provider's label (`baixo`, `moderado`,
/// `alto`, `muito alto`, `extremo`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UvIndex {
    pub date: String,
    pub location: String,
    pub uv_index: f64,
    pub uv_level: String,
    /// Minutes of safe exposure
    #[serde(default)]
    pub protection_time: Option<f64>,
}
