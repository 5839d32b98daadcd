//! Last successfully retrieved payloads, per category.
//!
//! `None` means "never loaded"; `Some(vec![])` is a successful empty
//! answer. Entries only change when a load for their own category
//! completes, so data from other categories survives filter changes.

use crate::error::QueryError;
use ipma_types::agriculture::{AgriculturalRecord, WaterQualityZone};
use ipma_types::dashboard::{DashboardData, QuickLinks};
use ipma_types::forecast::{DailyForecast, Location};
use ipma_types::marine::{FireRisk, SeaState, UvIndex};
use ipma_types::seismic::SeismicEvent;
use ipma_types::station::{StationObservation, WeatherStation};
use ipma_types::warning::WeatherWarning;
use ipma_types::{AgriculturalType, Region};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardCache {
    pub data: Option<DashboardData>,
    pub quick_links: Option<QuickLinks>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherCache {
    pub districts: Option<Vec<String>>,
    pub locations: Option<Vec<Location>>,
    pub forecast: Option<DailyForecast>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeismicCache {
    /// Region the cached events belong to.
    pub region: Region,
    pub events: Option<Vec<SeismicEvent>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarineCache {
    pub fire_risk: Option<Vec<FireRisk>>,
    pub uv_index: Option<Vec<UvIndex>>,
    pub sea_state: Option<Vec<SeaState>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationsCache {
    pub stations: Option<Vec<WeatherStation>>,
    pub observations: Option<Vec<StationObservation>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgricultureCache {
    /// Series the cached records belong to.
    pub kind: AgriculturalType,
    pub records: Option<Vec<AgriculturalRecord>>,
    pub water_quality: Option<Vec<WaterQualityZone>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    pub dashboard: DashboardCache,
    pub weather: WeatherCache,
    pub warnings: Option<Vec<WeatherWarning>>,
    pub seismic: SeismicCache,
    pub marine: MarineCache,
    pub stations: StationsCache,
    pub agriculture: AgricultureCache,
}

/// Payload of one successful category query.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The dashboard envelope carries two independent fields, either of
    /// which may be absent.
    Dashboard {
        data: Option<DashboardData>,
        quick_links: Option<QuickLinks>,
    },
    Warnings(Vec<WeatherWarning>),
    Seismic(Region, Vec<SeismicEvent>),
    FireRisk(Vec<FireRisk>),
    UvIndex(Vec<UvIndex>),
    SeaState(Vec<SeaState>),
    Stations(Vec<WeatherStation>),
    Observations(Vec<StationObservation>),
    Agricultural(AgriculturalType, Vec<AgriculturalRecord>),
    WaterQuality(Vec<WaterQualityZone>),
}

/// How absent dashboard fields are treated on merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Every field is replaced; a missing `dashboard` field is an error.
    Overwrite,
    /// Absent fields leave the cached value alone. Used by the initial
    /// mount load only.
    KeepMissing,
}

impl ResultCache {
    /// Store one query's payload. Each payload replaces only its own field.
    pub fn merge(&mut self, payload: Payload, policy: MergePolicy) -> Result<(), QueryError> {
        match payload {
            Payload::Dashboard { data, quick_links } => match policy {
                MergePolicy::Overwrite => {
                    let data = data.ok_or(QueryError::Envelope { message: None })?;
                    self.dashboard = DashboardCache {
                        data: Some(data),
                        quick_links,
                    };
                }
                MergePolicy::KeepMissing => {
                    if data.is_some() {
                        self.dashboard.data = data;
                    }
                    if quick_links.is_some() {
                        self.dashboard.quick_links = quick_links;
                    }
                }
            },
            Payload::Warnings(warnings) => self.warnings = Some(warnings),
            Payload::Seismic(region, events) => {
                self.seismic = SeismicCache {
                    region,
                    events: Some(events),
                }
            }
            Payload::FireRisk(list) => self.marine.fire_risk = Some(list),
            Payload::UvIndex(list) => self.marine.uv_index = Some(list),
            Payload::SeaState(list) => self.marine.sea_state = Some(list),
            Payload::Stations(list) => self.stations.stations = Some(list),
            Payload::Observations(list) => self.stations.observations = Some(list),
            Payload::Agricultural(kind, records) => {
                self.agriculture.kind = kind;
                self.agriculture.records = Some(records);
            }
            Payload::WaterQuality(zones) => self.agriculture.water_quality = Some(zones),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipma_types::dashboard::DataSummary;
    use std::collections::BTreeMap;

    fn dashboard(version: &str) -> DashboardData {
        DashboardData {
            api_status: "online".to_string(),
            version: version.to_string(),
            last_update: "2024-06-01".to_string(),
            data_summary: DataSummary::default(),
            service_status: BTreeMap::new(),
            coverage: BTreeMap::new(),
            data_freshness: BTreeMap::new(),
        }
    }

    fn links() -> QuickLinks {
        QuickLinks {
            documentation: "/docs".to_string(),
            all_endpoints: "/".to_string(),
            health_check: "/health".to_string(),
        }
    }

    #[test]
    fn test_keep_missing_leaves_absent_dashboard_fields() {
        let mut cache = ResultCache::default();
        cache.dashboard = DashboardCache {
            data: Some(dashboard("1.0")),
            quick_links: Some(links()),
        };
        cache
            .merge(
                Payload::Dashboard {
                    data: Some(dashboard("2.0")),
                    quick_links: None,
                },
                MergePolicy::KeepMissing,
            )
            .unwrap();
        assert_eq!(cache.dashboard.data.as_ref().unwrap().version, "2.0");
        assert_eq!(cache.dashboard.quick_links, Some(links()));
    }

    #[test]
    fn test_overwrite_replaces_absent_quick_links() {
        let mut cache = ResultCache::default();
        cache.dashboard.quick_links = Some(links());
        cache
            .merge(
                Payload::Dashboard {
                    data: Some(dashboard("2.0")),
                    quick_links: None,
                },
                MergePolicy::Overwrite,
            )
            .unwrap();
        assert_eq!(cache.dashboard.quick_links, None);
    }

    #[test]
    fn test_overwrite_rejects_missing_dashboard_field() {
        let mut cache = ResultCache::default();
        cache.dashboard.data = Some(dashboard("1.0"));
        let result = cache.merge(
            Payload::Dashboard {
                data: None,
                quick_links: Some(links()),
            },
            MergePolicy::Overwrite,
        );
        assert_eq!(result, Err(QueryError::Envelope { message: None }));
        assert_eq!(cache.dashboard.data.as_ref().unwrap().version, "1.0");
        assert_eq!(cache.dashboard.quick_links, None);
    }

    #[test]
    fn test_marine_fields_merge_independently() {
        let mut cache = ResultCache::default();
        cache
            .merge(Payload::SeaState(Vec::new()), MergePolicy::Overwrite)
            .unwrap();
        assert_eq!(cache.marine.sea_state, Some(Vec::new()));
        assert_eq!(cache.marine.fire_risk, None);
        assert_eq!(cache.marine.uv_index, None);
    }

    #[test]
    fn test_merge_replaces_rather_than_appends() {
        let mut cache = ResultCache::default();
        let warning = WeatherWarning {
            id: "w1".to_string(),
            area: "Lisboa".to_string(),
            warning_type: "Vento".to_string(),
            level: "amarelo".to_string(),
            start_time: "2024-06-01T00:00".to_string(),
            end_time: "2024-06-01T12:00".to_string(),
            description: "Vento forte".to_string(),
            phenomenon: "vento".to_string(),
        };
        for _ in 0..2 {
            cache
                .merge(Payload::Warnings(vec![warning.clone()]), MergePolicy::Overwrite)
                .unwrap();
        }
        assert_eq!(cache.warnings.as_ref().map(Vec::len), Some(1));
    }
}
