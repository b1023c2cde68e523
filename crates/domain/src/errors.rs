//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A location string was empty or whitespace only
    #[error("missing input")]
    EmptyLocation,

    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A distance or duration that is negative, NaN or infinite
    #[error("Invalid route estimate: {0}")]
    InvalidEstimate(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_location_message_is_missing_input() {
        assert_eq!(DomainError::EmptyLocation.to_string(), "missing input");
    }

    #[test]
    fn invalid_coordinates_carries_values() {
        let err = DomainError::invalid_coordinates(91.0, 10.0);
        match err {
            DomainError::InvalidCoordinates {
                latitude,
                longitude,
            } => {
                assert!((latitude - 91.0).abs() < f64::EPSILON);
                assert!((longitude - 10.0).abs() < f64::EPSILON);
            },
            _ => unreachable!("Expected InvalidCoordinates error"),
        }
    }

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::invalid_coordinates(91.0, 10.0);
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn invalid_estimate_message() {
        let err = DomainError::InvalidEstimate("distance is NaN".to_string());
        assert_eq!(err.to_string(), "Invalid route estimate: distance is NaN");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("uid is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: uid is required");
    }
}
