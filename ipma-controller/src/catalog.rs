//! Which provider queries each category needs, and how they combine.

use crate::state::FilterState;
use ipma_types::{AgriculturalType, Category, Region};
use std::fmt;

/// One provider query issued by a category load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Dashboard,
    Warnings,
    Seismic(Region),
    FireRisk,
    UvIndex,
    SeaState,
    Stations,
    LatestObservations,
    Agricultural(AgriculturalType),
    WaterQuality,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Dashboard => write!(f, "dashboard"),
            QueryKind::Warnings => write!(f, "warnings"),
            QueryKind::Seismic(region) => write!(f, "seismic[{}]", region),
            QueryKind::FireRisk => write!(f, "fire-risk"),
            QueryKind::UvIndex => write!(f, "uv-index"),
            QueryKind::SeaState => write!(f, "sea-state"),
            QueryKind::Stations => write!(f, "stations"),
            QueryKind::LatestObservations => write!(f, "latest-observations"),
            QueryKind::Agricultural(kind) => write!(f, "agriculture[{}]", kind),
            QueryKind::WaterQuality => write!(f, "water-quality"),
        }
    }
}

/// How the queries of a plan are run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Exactly one query.
    Single,
    /// All queries started together; each result stands on its own.
    FanOut,
    /// Queries run one after another, in order. A failure does not stop
    /// the ones after it.
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub category: Category,
    pub mode: ExecutionMode,
    pub queries: Vec<QueryKind>,
}

impl QueryPlan {
    fn single(category: Category, query: QueryKind) -> Self {
        Self {
            category,
            mode: ExecutionMode::Single,
            queries: vec![query],
        }
    }
}

/// The plan for loading `category` under `filters`.
///
/// `weather` has no automatic plan: forecasts are fetched only on an
/// explicit user action.
pub fn plan_for(category: Category, filters: &FilterState) -> Option<QueryPlan> {
    let plan = match category {
        Category::Weather => return None,
        Category::Dashboard => QueryPlan::single(category, QueryKind::Dashboard),
        Category::Warnings => QueryPlan::single(category, QueryKind::Warnings),
        Category::Seismic => QueryPlan::single(category, QueryKind::Seismic(filters.region)),
        Category::Marine => QueryPlan {
            category,
            mode: ExecutionMode::FanOut,
            queries: vec![QueryKind::FireRisk, QueryKind::UvIndex, QueryKind::SeaState],
        },
        Category::Stations => QueryPlan {
            category,
            mode: ExecutionMode::FanOut,
            queries: vec![QueryKind::Stations, QueryKind::LatestObservations],
        },
        Category::Agriculture => QueryPlan {
            category,
            mode: ExecutionMode::Sequential,
            queries: vec![
                QueryKind::Agricultural(filters.agricultural_type),
                QueryKind::WaterQuality,
            ],
        },
    };
    Some(plan)
}
