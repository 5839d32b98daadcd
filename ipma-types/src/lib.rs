//! Record types shared by the IPMA dashboard crates.
//!
//! Every struct mirrors the JSON the data provider returns. Optional provider
//! fields are `Option<_>` so a legitimate `0.0` reading is never confused
//! with a missing one.

pub mod agriculture;
pub mod category;
pub mod dashboard;
pub mod envelope;
pub mod forecast;
pub mod marine;
pub mod seismic;
pub mod station;
pub mod warning;

pub use category::{AgriculturalType, Category, Region, UnknownToken};
pub use envelope::{DashboardEnvelope, Envelope};

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
