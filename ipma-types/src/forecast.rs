use serde::{Deserialize, Serialize};

/// Weather condition code and its textual description.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub hour: String,
    /// Degrees Celsius
    pub temperature: f64,
    pub weather_condition: WeatherCondition,
    #[serde(default)]
    pub precipitation_probability: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<String>,
}

/// Forecast for one location and day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub location: String,
    pub district: String,
    #[serde(default)]
    pub hourly_forecasts: Vec<HourlyForecast>,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
}

/// A forecast location within a district.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub district: String,
}

impl Location {
    /// Selector value for this location; the provider addresses locations
    /// by lowercased name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Payload of the district enumeration.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct DistrictList {
    pub districts: Vec<String>,
    pub total: u32,
}
