use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a CLI or query token does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{token}'")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

/// The seven top-level data domains the dashboard can display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Dashboard,
    Weather,
    Warnings,
    Seismic,
    Marine,
    Stations,
    Agriculture,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Dashboard,
        Category::Weather,
        Category::Warnings,
        Category::Seismic,
        Category::Marine,
        Category::Stations,
        Category::Agriculture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dashboard => "dashboard",
            Category::Weather => "weather",
            Category::Warnings => "warnings",
            Category::Seismic => "seismic",
            Category::Marine => "marine",
            Category::Stations => "stations",
            Category::Agriculture => "agriculture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or(UnknownToken {
                kind: "category",
                token: s.to_string(),
            })
    }
}

/// Seismic monitoring region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Continente,
    Acores,
    Madeira,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Continente, Region::Acores, Region::Madeira];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Continente => "continente",
            Region::Acores => "acores",
            Region::Madeira => "madeira",
        }
    }

    /// Display name in the dashboard locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Continente => "Continente",
            Region::Acores => "Açores",
            Region::Madeira => "Madeira",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == lowered)
            .ok_or(UnknownToken {
                kind: "region",
                token: s.to_string(),
            })
    }
}

/// The agricultural series shown alongside water quality. Precipitation is
/// the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgriculturalType {
    #[default]
    Precipitation,
    Evapotranspiration,
    TemperatureMin,
    TemperatureMax,
    Pdsi,
}

impl AgriculturalType {
    pub const ALL: [AgriculturalType; 5] = [
        AgriculturalType::Precipitation,
        AgriculturalType::Evapotranspiration,
        AgriculturalType::TemperatureMin,
        AgriculturalType::TemperatureMax,
        AgriculturalType::Pdsi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgriculturalType::Precipitation => "precipitation",
            AgriculturalType::Evapotranspiration => "evapotranspiration",
            AgriculturalType::TemperatureMin => "temperature_min",
            AgriculturalType::TemperatureMax => "temperature_max",
            AgriculturalType::Pdsi => "pdsi",
        }
    }

    /// Path segment under `/agriculture/` serving this series.
    pub fn endpoint(&self) -> &'static str {
        match self {
            AgriculturalType::Precipitation => "precipitation",
            AgriculturalType::Evapotranspiration => "evapotranspiration",
            AgriculturalType::TemperatureMin => "temperature-min",
            AgriculturalType::TemperatureMax => "temperature-max",
            AgriculturalType::Pdsi => "pdsi",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AgriculturalType::Precipitation => "Precipitação",
            AgriculturalType::Evapotranspiration => "Evapotranspiração",
            AgriculturalType::TemperatureMin => "Temperatura Mínima",
            AgriculturalType::TemperatureMax => "Temperatura Máxima",
            AgriculturalType::Pdsi => "Índice de Seca (PDSI)",
        }
    }

    /// Parse a selector value, falling back to the default series for
    /// anything unrecognised.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for AgriculturalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgriculturalType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase().replace('-', "_");
        AgriculturalType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or(UnknownToken {
                kind: "agricultural type",
                token: s.to_string(),
            })
    }
}
