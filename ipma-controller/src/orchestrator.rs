//! Runs query plans against a [`QueryService`].
//!
//! The orchestrator only talks to the provider. It never touches view
//! state: the controller decides whether and how the outcomes are applied.

use crate::cache::Payload;
use crate::catalog::{ExecutionMode, QueryKind, QueryPlan};
use crate::error::QueryError;
use crate::service::{QueryResult, QueryService};
use futures::future::join_all;
use ipma_types::DashboardEnvelope;
use std::rc::Rc;

/// Result of one query within a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub query: QueryKind,
    pub result: Result<Payload, QueryError>,
}

pub struct DataOrchestrator<S> {
    service: Rc<S>,
}

impl<S> Clone for DataOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
        }
    }
}

pub(crate) fn unwrap_envelope<T>(response: QueryResult<T>) -> Result<T, QueryError> {
    response?
        .into_data()
        .map_err(|message| QueryError::Envelope { message })
}

fn dashboard_payload(envelope: DashboardEnvelope) -> Result<Payload, QueryError> {
    if !envelope.success {
        return Err(QueryError::Envelope {
            message: envelope.message,
        });
    }
    Ok(Payload::Dashboard {
        data: envelope.dashboard,
        quick_links: envelope.quick_links,
    })
}

impl<S: QueryService> DataOrchestrator<S> {
    pub fn new(service: Rc<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run every query of `plan` and collect their outcomes in plan order.
    ///
    /// Outcomes are independent: one failing query never discards the
    /// payloads of its siblings.
    pub async fn execute(&self, plan: &QueryPlan) -> Vec<QueryOutcome> {
        log::debug!(
            "[IPMA] orchestrator: {} -> {:?} {:?}",
            plan.category,
            plan.mode,
            plan.queries
        );
        match plan.mode {
            ExecutionMode::Single | ExecutionMode::FanOut => {
                join_all(plan.queries.iter().map(|query| self.run(*query))).await
            }
            ExecutionMode::Sequential => {
                let mut outcomes = Vec::with_capacity(plan.queries.len());
                for query in &plan.queries {
                    outcomes.push(self.run(*query).await);
                }
                outcomes
            }
        }
    }

    /// Issue a single query.
    pub async fn run(&self, query: QueryKind) -> QueryOutcome {
        let service = &self.service;
        let result = match query {
            QueryKind::Dashboard => service.dashboard().await.and_then(dashboard_payload),
            QueryKind::Warnings => unwrap_envelope(service.warnings().await).map(Payload::Warnings),
            QueryKind::Seismic(region) => unwrap_envelope(service.seismic(region).await)
                .map(|events| Payload::Seismic(region, events)),
            QueryKind::FireRisk => {
                unwrap_envelope(service.fire_risk().await).map(Payload::FireRisk)
            }
            QueryKind::UvIndex => unwrap_envelope(service.uv_index().await).map(Payload::UvIndex),
            QueryKind::SeaState => {
                unwrap_envelope(service.sea_state().await).map(Payload::SeaState)
            }
            QueryKind::Stations => {
                unwrap_envelope(service.stations().await).map(Payload::Stations)
            }
            QueryKind::LatestObservations => {
                unwrap_envelope(service.latest_observations().await).map(Payload::Observations)
            }
            QueryKind::Agricultural(kind) => {
                unwrap_envelope(service.agricultural(kind, None).await)
                    .map(|records| Payload::Agricultural(kind, records))
            }
            QueryKind::WaterQuality => {
                unwrap_envelope(service.water_quality().await).map(Payload::WaterQuality)
            }
        };
        if let Err(e) = &result {
            log::warn!("[IPMA] orchestrator: query {} failed: {}", query, e);
        }
        QueryOutcome { query, result }
    }
}
