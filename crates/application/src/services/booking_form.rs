//! Delivery booking form state
//!
//! Holds the pickup/drop texts and the estimate computed for them. The
//! form only becomes submittable once an estimate for the current texts is
//! ready; results computed for texts the user has since edited are ignored.

use domain::value_objects::{LocationQuery, RouteEstimate};
use domain::{DeliveryBooking, RouteResult};
use tracing::debug;

use crate::error::ApplicationError;

/// Estimation state of the booking form
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateState {
    /// Nothing to estimate (a location is missing)
    Idle,
    /// An estimation for the current texts is in flight
    Calculating,
    /// An estimate for the current texts is available
    Ready(RouteEstimate),
    /// Estimation for the current texts failed
    Unavailable(String),
}

/// Booking form for a single delivery
#[derive(Debug, Clone)]
pub struct BookingForm {
    pickup: String,
    drop: String,
    state: EstimateState,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    /// Create an empty form
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pickup: String::new(),
            drop: String::new(),
            state: EstimateState::Idle,
        }
    }

    /// Current pickup text
    #[must_use]
    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    /// Current drop text
    #[must_use]
    pub fn drop_location(&self) -> &str {
        &self.drop
    }

    /// Current estimation state
    #[must_use]
    pub const fn state(&self) -> &EstimateState {
        &self.state
    }

    /// Update the pickup text; returns true if it changed
    pub fn set_pickup(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.pickup {
            return false;
        }
        self.pickup = text;
        self.reset_state();
        true
    }

    /// Update the drop text; returns true if it changed
    pub fn set_drop(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.drop {
            return false;
        }
        self.drop = text;
        self.reset_state();
        true
    }

    /// Check if both locations are filled in
    #[must_use]
    pub fn has_both_locations(&self) -> bool {
        !self.pickup.trim().is_empty() && !self.drop.trim().is_empty()
    }

    /// Mark an estimation as started; returns false if a location is missing
    pub fn begin_estimation(&mut self) -> bool {
        if !self.has_both_locations() {
            self.state = EstimateState::Idle;
            return false;
        }
        self.state = EstimateState::Calculating;
        true
    }

    /// Apply an estimation result computed for `start`/`end`
    ///
    /// Returns false (and leaves the state untouched) if the texts have
    /// changed since the estimation was scheduled.
    pub fn apply_result(&mut self, start: &str, end: &str, result: &RouteResult) -> bool {
        if start != self.pickup || end != self.drop {
            debug!(%start, %end, "Ignoring estimate for outdated locations");
            return false;
        }

        self.state = match result {
            RouteResult::Success(details) => EstimateState::Ready(details.estimate()),
            RouteResult::Failure { reason } => EstimateState::Unavailable(reason.clone()),
        };
        true
    }

    /// Check if the form can be submitted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.has_both_locations() && matches!(self.state, EstimateState::Ready(_))
    }

    /// Build the booking payload
    ///
    /// # Errors
    ///
    /// Returns a domain error for a missing location, or `InvalidState` if
    /// no estimate is ready.
    pub fn submit(&self) -> Result<DeliveryBooking, ApplicationError> {
        let pickup = LocationQuery::new(&self.pickup)?;
        let drop = LocationQuery::new(&self.drop)?;

        let EstimateState::Ready(estimate) = self.state else {
            return Err(ApplicationError::InvalidState(
                "no route estimate is available yet".to_string(),
            ));
        };

        Ok(DeliveryBooking::new(pickup, drop, estimate))
    }

    /// Headline for the estimate panel, `None` when nothing is shown
    #[must_use]
    pub fn distance_text(&self) -> Option<String> {
        match &self.state {
            EstimateState::Idle => None,
            EstimateState::Calculating => Some("Calculating...".to_string()),
            EstimateState::Ready(estimate) => Some(format!("{:.1} km", estimate.distance_km())),
            EstimateState::Unavailable(_) => Some("Unable to calculate".to_string()),
        }
    }

    /// Detail line for the estimate panel, `None` when nothing is shown
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match &self.state {
            EstimateState::Idle => None,
            EstimateState::Calculating => Some("Finding the best route...".to_string()),
            EstimateState::Ready(estimate) => Some(format!(
                "Approximate delivery time: {} minutes",
                estimate.duration_min_ceil()
            )),
            EstimateState::Unavailable(_) => {
                Some("Could not find a route between these locations".to_string())
            },
        }
    }

    fn reset_state(&mut self) {
        self.state = if self.has_both_locations() {
            // submit stays disabled until the new estimate arrives
            EstimateState::Calculating
        } else {
            EstimateState::Idle
        };
    }
}
