//! The view controller: applies state transitions and runs the
//! orchestration they trigger.
//!
//! Every request is tagged with two counters when it starts:
//!
//! - a generation per request slot (one per category, plus location
//!   reloads and forecast fetches). Results whose generation is no longer
//!   the latest for their slot are dropped, so a slow superseded request
//!   can never overwrite a newer one.
//! - a global ticket. Only the most recently started request settles the
//!   shared loading flag and error.

use crate::cache::MergePolicy;
use crate::catalog::{plan_for, QueryKind};
use crate::error::{ErrorState, QueryError};
use crate::orchestrator::{unwrap_envelope, DataOrchestrator, QueryOutcome};
use crate::service::QueryService;
use crate::state::{ApiStatus, Trigger, ViewState};
use chrono::NaiveDate;
use futures::future::join3;
use ipma_types::{AgriculturalType, Category, Region};
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const MOUNT_FAILED: &str = "Erro ao carregar dados iniciais";
const LOCATIONS_FAILED: &str = "Erro ao carregar localidades";
const FORECAST_FAILED: &str = "Erro ao obter previsão";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RequestSlot {
    Category(Category),
    Districts,
    Locations,
    Forecast,
    Mount,
}

#[derive(Debug, Clone, Copy)]
struct Attempt {
    slot: RequestSlot,
    generation: u64,
    ticket: u64,
}

#[derive(Default)]
struct Inner {
    state: ViewState,
    generations: HashMap<RequestSlot, u64>,
    latest_ticket: u64,
    mounted: bool,
}

impl Inner {
    /// Supersede every outstanding request of `slot`.
    fn bump(&mut self, slot: RequestSlot) -> u64 {
        let generation = self.generations.entry(slot).or_default();
        *generation += 1;
        *generation
    }

    fn is_current(&self, slot: RequestSlot, generation: u64) -> bool {
        self.generations.get(&slot).copied().unwrap_or_default() == generation
    }

    /// Start a request. The error is cleared before anything is sent.
    fn begin(&mut self, slot: RequestSlot) -> Attempt {
        self.state.error = None;
        self.state.loading = true;
        let generation = self.bump(slot);
        self.latest_ticket += 1;
        Attempt {
            slot,
            generation,
            ticket: self.latest_ticket,
        }
    }

    /// Finish a request. Loading and error are left alone when a newer
    /// request has started since.
    fn settle(&mut self, attempt: Attempt, error: Option<ErrorState>) {
        if attempt.ticket != self.latest_ticket {
            if let Some(error) = error {
                log::debug!("[IPMA] superseded request failed: {}", error.message);
            }
            return;
        }
        self.state.loading = false;
        if self.is_current(attempt.slot, attempt.generation) {
            self.state.error = error;
        }
    }
}

fn category_error_message(category: Category, err: &QueryError) -> String {
    match err.provider_message() {
        Some(message) => format!("Erro ao carregar dados de {}: {}", category, message),
        None => format!("Erro ao carregar dados de {}", category),
    }
}

fn forecast_error_message(err: &QueryError) -> String {
    match err {
        QueryError::Validation(message) => message.clone(),
        QueryError::Envelope { message } => message
            .clone()
            .unwrap_or_else(|| FORECAST_FAILED.to_string()),
        QueryError::Transport(message) => format!("Erro ao conectar com a API: {}", message),
    }
}

/// Single source of truth for the dashboard view.
///
/// Cheap to clone; clones share the same state. All methods must be
/// driven from one execution context.
pub struct ViewController<S> {
    orchestrator: DataOrchestrator<S>,
    inner: Rc<RefCell<Inner>>,
}

impl<S> Clone for ViewController<S> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: self.orchestrator.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: QueryService> ViewController<S> {
    pub fn new(service: S) -> Self {
        Self::with_shared(Rc::new(service))
    }

    pub fn with_shared(service: Rc<S>) -> Self {
        Self {
            orchestrator: DataOrchestrator::new(service),
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    pub fn service(&self) -> &S {
        self.orchestrator.service()
    }

    /// Borrow the current state. Drop the guard before awaiting any
    /// controller method.
    pub fn state(&self) -> Ref<'_, ViewState> {
        Ref::map(self.inner.borrow(), |inner| &inner.state)
    }

    pub fn snapshot(&self) -> ViewState {
        self.state().clone()
    }

    /// Initial load: health, the dashboard and the district list, all at
    /// once. Only the first call does anything.
    pub async fn mount(&self) {
        let (attempt, dashboard_generation, districts_generation) = {
            let mut inner = self.inner.borrow_mut();
            if inner.mounted {
                return;
            }
            inner.mounted = true;
            let attempt = inner.begin(RequestSlot::Mount);
            let dashboard = inner.bump(RequestSlot::Category(Category::Dashboard));
            let districts = inner.bump(RequestSlot::Districts);
            (attempt, dashboard, districts)
        };
        log::info!("[IPMA] mount: loading health, dashboard and districts");

        let service = self.service();
        let (health, dashboard, districts) = join3(
            service.health(),
            self.orchestrator.run(QueryKind::Dashboard),
            service.districts(),
        )
        .await;

        let mut inner = self.inner.borrow_mut();
        let mut failed = false;
        inner.state.api_status = match health {
            Ok(health) if health.is_healthy() => ApiStatus::Online,
            Ok(health) => {
                log::warn!("[IPMA] mount: api reports status '{}'", health.status);
                ApiStatus::Offline
            }
            Err(e) => {
                log::warn!("[IPMA] mount: health check failed: {}", e);
                failed = true;
                ApiStatus::Offline
            }
        };

        let dashboard_slot = RequestSlot::Category(Category::Dashboard);
        match dashboard.result {
            Ok(payload) if inner.is_current(dashboard_slot, dashboard_generation) => {
                if let Err(e) = inner.state.cache.merge(payload, MergePolicy::KeepMissing) {
                    log::warn!("[IPMA] mount: dashboard not merged: {}", e);
                }
            }
            Ok(_) => log::debug!("[IPMA] mount: dashboard superseded, dropped"),
            Err(_) => failed = true,
        }

        match unwrap_envelope(districts) {
            Ok(list) if inner.is_current(RequestSlot::Districts, districts_generation) => {
                inner.state.cache.weather.districts = Some(list.districts);
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("[IPMA] mount: districts failed: {}", e);
                failed = true;
            }
        }

        let error = failed.then(|| inner.state.error_for(Category::Dashboard, None, MOUNT_FAILED));
        inner.settle(attempt, error);
        log::info!("[IPMA] mount: done, api {:?}", inner.state.api_status);
    }

    pub async fn select_category(&self, category: Category) {
        let trigger = self.inner.borrow_mut().state.select_category(category);
        self.dispatch(trigger).await;
    }

    pub async fn set_region(&self, region: Region) {
        let trigger = self.inner.borrow_mut().state.set_region(region);
        self.dispatch(trigger).await;
    }

    pub async fn set_agricultural_type(&self, kind: AgriculturalType) {
        let trigger = self.inner.borrow_mut().state.set_agricultural_type(kind);
        self.dispatch(trigger).await;
    }

    /// Select a district. A change also drops any outstanding forecast or
    /// location reload for the previous district.
    pub async fn set_district(&self, district: Option<String>) {
        let trigger = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.state.filters.cascade.district().map(str::to_string);
            let trigger = inner.state.set_district(district);
            if inner.state.filters.cascade.district() != before.as_deref() {
                inner.bump(RequestSlot::Forecast);
                inner.bump(RequestSlot::Locations);
            }
            trigger
        };
        self.dispatch(trigger).await;
    }

    pub fn set_location(&self, location: Option<String>) {
        self.inner.borrow_mut().state.set_location(location);
    }

    pub fn set_date(&self, date: Option<NaiveDate>) {
        self.inner.borrow_mut().state.set_date(date);
    }

    /// Re-run whatever the active category shows.
    pub async fn retry(&self) {
        let active = self.state().active;
        match active {
            Category::Weather => self.fetch_forecast().await,
            category => self.load_category(category).await,
        }
    }

    pub async fn dispatch(&self, trigger: Option<Trigger>) {
        match trigger {
            Some(Trigger::LoadCategory(category)) => self.load_category(category).await,
            Some(Trigger::ReloadLocations(district)) => self.reload_locations(&district).await,
            None => {}
        }
    }

    /// Run the query plan of `category` and merge every successful result.
    ///
    /// Weather has no plan; loading it only clears the error.
    pub async fn load_category(&self, category: Category) {
        let (plan, attempt, filters) = {
            let mut inner = self.inner.borrow_mut();
            let Some(plan) = plan_for(category, &inner.state.filters) else {
                inner.state.error = None;
                return;
            };
            let filters = inner.state.filters.clone();
            (plan, inner.begin(RequestSlot::Category(category)), filters)
        };
        log::info!("[IPMA] load {}: {:?}", category, plan.queries);

        let outcomes = self.orchestrator.execute(&plan).await;

        let mut inner = self.inner.borrow_mut();
        let current = inner.is_current(attempt.slot, attempt.generation);
        if !current {
            log::info!("[IPMA] load {}: superseded, results dropped", category);
        }
        let mut first_failure: Option<(QueryKind, QueryError)> = None;
        for QueryOutcome { query, result } in outcomes {
            let merged = match result {
                Ok(payload) if current => inner.state.cache.merge(payload, MergePolicy::Overwrite),
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            };
            if let Err(e) = merged {
                first_failure.get_or_insert((query, e));
            }
        }
        let error = first_failure.map(|(query, e)| ErrorState {
            message: category_error_message(category, &e),
            category,
            query: Some(query),
            filters,
        });
        if let Some(error) = &error {
            log::warn!("[IPMA] load {}: {}", category, error.message);
        }
        inner.settle(attempt, error);
    }

    /// Reload the location list for `district`. On success the selected
    /// location and the displayed forecast are cleared.
    pub async fn reload_locations(&self, district: &str) {
        let attempt = self.inner.borrow_mut().begin(RequestSlot::Locations);
        log::info!("[IPMA] locations: {}", district);

        let response = self.service().locations(district).await;

        let mut inner = self.inner.borrow_mut();
        let error = match unwrap_envelope(response) {
            Ok(locations) if inner.is_current(attempt.slot, attempt.generation) => {
                inner.state.cache.weather.locations = Some(locations);
                inner.state.cache.weather.forecast = None;
                inner.state.set_location(None);
                None
            }
            Ok(_) => {
                log::info!("[IPMA] locations for '{}' superseded, dropped", district);
                None
            }
            Err(e) => {
                log::warn!("[IPMA] locations for '{}' failed: {}", district, e);
                Some(inner.state.error_for(Category::Weather, None, LOCATIONS_FAILED))
            }
        };
        inner.settle(attempt, error);
    }

    /// Fetch the forecast for the selected district and location, for the
    /// selected date when one is set. Without both selections this fails
    /// locally and nothing is sent.
    pub async fn fetch_forecast(&self) {
        let target = self.state().filters.cascade.forecast_target();
        let target = match target {
            Ok(target) => target,
            Err(e) => {
                // Local failures take a ticket like any other attempt.
                let mut inner = self.inner.borrow_mut();
                let attempt = inner.begin(RequestSlot::Forecast);
                let error = inner
                    .state
                    .error_for(Category::Weather, None, forecast_error_message(&e));
                inner.settle(attempt, Some(error));
                return;
            }
        };

        let attempt = self.inner.borrow_mut().begin(RequestSlot::Forecast);
        log::info!(
            "[IPMA] forecast: {}/{} {:?}",
            target.district,
            target.location,
            target.date
        );

        let service = self.service();
        let response = match target.date {
            Some(date) => {
                service
                    .forecast_by_date(&target.district, &target.location, date)
                    .await
            }
            None => {
                service
                    .current_forecast(&target.district, &target.location)
                    .await
            }
        };

        let mut inner = self.inner.borrow_mut();
        let error = match unwrap_envelope(response) {
            Ok(forecast) if inner.is_current(attempt.slot, attempt.generation) => {
                inner.state.cache.weather.forecast = Some(forecast);
                None
            }
            Ok(_) => {
                log::info!("[IPMA] forecast superseded, dropped");
                None
            }
            Err(e) => {
                log::warn!("[IPMA] forecast failed: {}", e);
                Some(
                    inner
                        .state
                        .error_for(Category::Weather, None, forecast_error_message(&e)),
                )
            }
        };
        inner.settle(attempt, error);
    }
}
