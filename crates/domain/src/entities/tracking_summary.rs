//! Delivery tracking summary

use serde::{Deserialize, Serialize};

use crate::entities::RouteResult;
use crate::value_objects::{LocationQuery, RouteEstimate};

/// Placeholder distance shown when no estimate could be computed
const PLACEHOLDER_DISTANCE_KM: f64 = 12.5;

/// Placeholder duration shown when no estimate could be computed
const PLACEHOLDER_DURATION_MIN: f64 = 25.0;

/// What the tracking view shows for an active delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingSummary {
    /// Start location (canonical name on success, typed text on fallback)
    pub start_location: String,
    /// End location (canonical name on success, typed text on fallback)
    pub end_location: String,
    /// Estimate, real or placeholder
    pub estimate: RouteEstimate,
    /// Why the placeholder is shown, if it is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl TrackingSummary {
    /// Build a summary from an estimation result, falling back to the
    /// placeholder estimate on failure
    #[must_use]
    pub fn from_result(pickup: &LocationQuery, drop: &LocationQuery, result: &RouteResult) -> Self {
        match result {
            RouteResult::Success(details) => Self {
                start_location: details.start_location().to_string(),
                end_location: details.end_location().to_string(),
                estimate: details.estimate(),
                fallback_reason: None,
            },
            RouteResult::Failure { reason } => Self::placeholder(pickup, drop, reason.clone()),
        }
    }

    /// Placeholder summary with the typed locations
    #[must_use]
    pub fn placeholder(pickup: &LocationQuery, drop: &LocationQuery, reason: String) -> Self {
        Self {
            start_location: pickup.to_string(),
            end_location: drop.to_string(),
            estimate: placeholder_estimate(),
            fallback_reason: Some(reason),
        }
    }

    /// Check if this summary shows the placeholder estimate
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

const fn placeholder_estimate() -> RouteEstimate {
    RouteEstimate::new_unchecked(PLACEHOLDER_DISTANCE_KM, PLACEHOLDER_DURATION_MIN)
}
