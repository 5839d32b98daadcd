//! Response wrappers used by the data provider.
//!
//! Most operations answer `{success, data?, message?}`. The dashboard
//! operation carries its payload under `dashboard` instead, plus a set of
//! quick links.

use crate::dashboard::{DashboardData, QuickLinks};
use serde::{Deserialize, Serialize};

/// The `{success, data, message}` wrapper.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The payload when the provider reported success and included it.
    /// Otherwise the provider's message, if any.
    pub fn into_data(self) -> Result<T, Option<String>> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.message),
        }
    }
}

/// Response of the dashboard operation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DashboardEnvelope {
    pub success: bool,
    #[serde(default)]
    pub dashboard: Option<DashboardData>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub quick_links: Option<QuickLinks>,
}

impl DashboardEnvelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            dashboard: None,
            message: Some(message.into()),
            quick_links: None,
        }
    }
}
