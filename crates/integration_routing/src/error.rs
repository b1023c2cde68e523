//! Routing error types

use thiserror::Error;

/// Errors that can occur during routing
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the routing service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the routing service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by the server)
        retry_after_secs: Option<u64>,
    },

    /// The service answered, but has no route between the points
    #[error("No route found")]
    NoRouteFound,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(RoutingError::ConnectionFailed("refused".to_string()).is_retryable());
        assert!(RoutingError::RequestFailed("HTTP 502".to_string()).is_retryable());
        assert!(RoutingError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            RoutingError::RateLimitExceeded {
                retry_after_secs: Some(60)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!RoutingError::NoRouteFound.is_retryable());
        assert!(!RoutingError::ParseError("eof".to_string()).is_retryable());
        assert!(!RoutingError::ConfigurationError("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(RoutingError::NoRouteFound.to_string(), "No route found");

        let err = RoutingError::RateLimitExceeded {
            retry_after_secs: Some(30),
        };
        assert!(err.to_string().contains("30"));

        let err = RoutingError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
