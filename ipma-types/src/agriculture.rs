use crate::{AgriculturalType, Coordinates};
use serde::{Deserialize, Serialize};

/// Daily agricultural indicators for a municipality. Each agricultural
/// series populates only its own field.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AgriculturalRecord {
    pub date: String,
    pub municipality: String,
    #[serde(default)]
    pub evapotranspiration: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub pdsi_index: Option<f64>,
}

impl AgriculturalRecord {
    /// The reading belonging to the given series.
    pub fn value_for(&self, kind: AgriculturalType) -> Option<f64> {
        match kind {
            AgriculturalType::Evapotranspiration => self.evapotranspiration,
            AgriculturalType::Precipitation => self.precipitation,
            AgriculturalType::TemperatureMin => self.min_temperature,
            AgriculturalType::TemperatureMax => self.max_temperature,
            AgriculturalType::Pdsi => self.pdsi_index,
        }
    }
}

/// Shellfish harvesting zone status (`aberta`, `fechada`, `condicional`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WaterQualityZone {
    pub zone_id: String,
    pub zone_name: String,
    pub status: String,
    #[serde(default)]
    pub restriction_type: Option<String>,
    pub coordinates: Coordinates,
    pub last_update: String,
}
