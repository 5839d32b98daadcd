use crate::Coordinates;
use serde::{Deserialize, Serialize};

/// A recorded seismic event.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SeismicEvent {
    pub id: String,
    pub magnitude: f64,
    /// Depth in kilometres
    pub depth: f64,
    pub location: String,
    pub time: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub intensity: Option<String>,
}
