use crate::Coordinates;
use serde::{Deserialize, Serialize};

/// A surface weather station.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherStation {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    /// Metres above sea level
    #[serde(default)]
    pub altitude: Option<f64>,
}

/// One observation reported by a station.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StationObservation {
    pub station_id: String,
    pub station_name: String,
    pub timestamp: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
}
