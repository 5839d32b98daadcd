use crate::catalog::QueryKind;
use crate::state::FilterState;
use ipma_types::Category;
use thiserror::Error;

/// Why a query produced no usable payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A required filter was missing; nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// The provider answered `success: false`, or left out the payload.
    #[error("provider reported failure: {}", .message.as_deref().unwrap_or("no message"))]
    Envelope { message: Option<String> },
    /// Network, timeout, HTTP status or decoding failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl QueryError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        QueryError::Transport(err.to_string())
    }

    /// The provider's own message, when it sent one.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            QueryError::Envelope { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Last error shown to the user, with the context it happened in.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub category: Category,
    /// The failing query, when the failure belongs to one.
    pub query: Option<QueryKind>,
    /// Filters at the time of the failure.
    pub filters: FilterState,
}
