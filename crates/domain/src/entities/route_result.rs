//! Route estimation result
//!
//! The single value handed back to callers of the estimator. A success
//! always carries both resolved coordinates and an estimate; there is no
//! partially-filled success.

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoCoordinate, RouteEstimate};

/// A fully resolved route between two geocoded places
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDetails {
    start_location: String,
    end_location: String,
    #[serde(flatten)]
    estimate: RouteEstimate,
    start_coord: GeoCoordinate,
    end_coord: GeoCoordinate,
}

impl RouteDetails {
    /// Build route details; locations are taken from the coordinates' display names
    #[must_use]
    pub fn new(start_coord: GeoCoordinate, end_coord: GeoCoordinate, estimate: RouteEstimate) -> Self {
        Self {
            start_location: start_coord.display_name().to_string(),
            end_location: end_coord.display_name().to_string(),
            estimate,
            start_coord,
            end_coord,
        }
    }

    /// Canonical name of the start location
    #[must_use]
    pub fn start_location(&self) -> &str {
        &self.start_location
    }

    /// Canonical name of the end location
    #[must_use]
    pub fn end_location(&self) -> &str {
        &self.end_location
    }

    /// The distance/duration estimate
    #[must_use]
    pub const fn estimate(&self) -> RouteEstimate {
        self.estimate
    }

    /// Driving distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.estimate.distance_km()
    }

    /// Driving duration in minutes
    #[must_use]
    pub const fn duration_min(&self) -> f64 {
        self.estimate.duration_min()
    }

    /// Resolved start coordinate
    #[must_use]
    pub const fn start_coord(&self) -> &GeoCoordinate {
        &self.start_coord
    }

    /// Resolved end coordinate
    #[must_use]
    pub const fn end_coord(&self) -> &GeoCoordinate {
        &self.end_coord
    }
}

/// Outcome of one route estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteResult {
    /// Both places resolved and a route was found
    Success(RouteDetails),
    /// Estimation failed; `reason` is meant for display
    Failure {
        /// Human-readable failure reason
        reason: String,
    },
}

impl RouteResult {
    /// Reason used when either location text is empty
    pub const MISSING_INPUT: &'static str = "missing input";

    /// Reason used when either location could not be geocoded
    pub const UNRESOLVED_LOCATIONS: &'static str =
        "Could not find coordinates for one or both locations";

    /// Reason used when the routing service found no route
    pub const NO_ROUTE: &'static str = "No route found";

    /// Create a failure with the given reason
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Check if this is a success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Route details, if successful
    #[must_use]
    pub const fn details(&self) -> Option<&RouteDetails> {
        match self {
            Self::Success(details) => Some(details),
            Self::Failure { .. } => None,
        }
    }

    /// Failure reason, if failed
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { reason } => Some(reason),
        }
    }

    /// The estimate, if successful
    #[must_use]
    pub fn estimate(&self) -> Option<RouteEstimate> {
        self.details().map(RouteDetails::estimate)
    }
}

impl From<RouteDetails> for RouteResult {
    fn from(details: RouteDetails) -> Self {
        Self::Success(details)
    }
}
