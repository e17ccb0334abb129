//! Client error types

use shared::InputError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (rejected by the service or by the workflow)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Staff input could not be parsed
    #[error("Validation error: {0}")]
    Input(#[from] InputError),

    /// Operation not allowed in the current screen state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True when the failure was caught before any request was issued
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Input(_) | Self::InvalidState(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
