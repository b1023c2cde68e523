//! Driving distance/duration estimate

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Driving distance in kilometers and duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRouteEstimate")]
pub struct RouteEstimate {
    distance_km: f64,
    duration_min: f64,
}

#[derive(Deserialize)]
struct RawRouteEstimate {
    distance_km: f64,
    duration_min: f64,
}

impl TryFrom<RawRouteEstimate> for RouteEstimate {
    type Error = DomainError;

    fn try_from(raw: RawRouteEstimate) -> Result<Self, Self::Error> {
        Self::new(raw.distance_km, raw.duration_min)
    }
}

impl RouteEstimate {
    /// Create an estimate from kilometers and minutes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEstimate` if either value is negative,
    /// NaN or infinite.
    pub fn new(distance_km: f64, duration_min: f64) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidEstimate(format!(
                "distance must be a non-negative finite number, got {distance_km}"
            )));
        }
        if !duration_min.is_finite() || duration_min < 0.0 {
            return Err(DomainError::InvalidEstimate(format!(
                "duration must be a non-negative finite number, got {duration_min}"
            )));
        }
        Ok(Self {
            distance_km,
            duration_min,
        })
    }

    /// Create an estimate without validation (for trusted constants)
    ///
    /// Caller must ensure both values are finite and non-negative.
    #[must_use]
    pub const fn new_unchecked(distance_km: f64, duration_min: f64) -> Self {
        Self {
            distance_km,
            duration_min,
        }
    }

    /// Create an estimate from a routing provider's meters and seconds
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEstimate` if either converted value is invalid.
    pub fn from_meters_and_seconds(meters: f64, seconds: f64) -> Result<Self, DomainError> {
        Self::new(meters / METERS_PER_KM, seconds / SECONDS_PER_MINUTE)
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Duration rounded up to whole minutes, as shown to users
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn duration_min_ceil(&self) -> u64 {
        // duration_min is finite and non-negative by construction
        self.duration_min.ceil() as u64
    }
}
