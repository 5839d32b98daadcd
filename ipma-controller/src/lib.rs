//! View-state and data-orchestration controller for the IPMA dashboard.
//!
//! The dashboard shows one [`Category`](ipma_types::Category) at a time.
//! This crate decides which provider queries a category needs, runs them,
//! merges their results into a per-category cache and keeps the
//! loading/error state consistent while requests race each other.
//!
//! # Architecture
//!
//! - [`cascade`]: district → location → date selection chain
//! - [`catalog`]: pure lookup from category + filters to a query plan
//! - [`orchestrator`]: executes a plan against a [`QueryService`]
//! - [`state`]: the view state and its named transition functions
//! - [`controller`]: [`ViewController`], which applies transitions and
//!   dispatches the orchestration they trigger
//! - [`view`]: render-time projections that attach severity descriptors
//!
//! All orchestration runs on a single execution context. Shared state lives
//! behind `Rc<RefCell<_>>` and no borrow is held across an `.await`.
//!
//! # Usage
//!
//! ```ignore
//! use ipma_controller::ViewController;
//! use ipma_types::{Category, Region};
//!
//! let controller = ViewController::new(service);
//! controller.mount().await;
//! controller.select_category(Category::Seismic).await;
//! controller.set_region(Region::Acores).await;
//! let state = controller.state();
//! ```

pub mod cache;
pub mod cascade;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod orchestrator;
pub mod service;
pub mod state;
pub mod view;

#[cfg(test)]
mod fake;

pub use cache::{MergePolicy, Payload, ResultCache};
pub use cascade::{ForecastTarget, LocationCascade};
pub use catalog::{ExecutionMode, QueryKind, QueryPlan};
pub use controller::ViewController;
pub use error::{ErrorState, QueryError};
pub use service::QueryService;
pub use state::{ApiStatus, FilterState, Trigger, ViewState};
