//! reqwest-backed implementation of the dashboard's
//! [`QueryService`](ipma_controller::QueryService).
//!
//! Every operation is a `GET` against the provider's REST API. Envelopes
//! are returned as received; HTTP error statuses, connection problems,
//! timeouts and undecodable bodies all become
//! [`QueryError::Transport`](ipma_controller::QueryError::Transport).

pub mod config;
pub mod http;

pub use config::ClientConfig;
pub use http::HttpQueryService;
