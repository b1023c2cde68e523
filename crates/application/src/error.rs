//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (network failure, non-2xx, malformed payload)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// User not authorized
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Operation not valid in the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ExternalService(_)
        )
    }
}
