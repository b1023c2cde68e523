//! Delivery tracking summary service

use std::sync::Arc;

use domain::value_objects::LocationQuery;
use domain::{DeliveryBooking, TrackingSummary};
use tracing::{instrument, warn};

use super::RouteEstimator;

/// Produces the route summary shown while a delivery is tracked
#[derive(Debug, Clone)]
pub struct TrackingService {
    estimator: Arc<RouteEstimator>,
}

impl TrackingService {
    /// Create a new tracking service
    pub const fn new(estimator: Arc<RouteEstimator>) -> Self {
        Self { estimator }
    }

    /// Estimate once and summarize, falling back to the placeholder estimate
    #[instrument(skip(self), fields(pickup = %pickup, drop = %drop))]
    pub async fn summary(&self, pickup: &LocationQuery, drop: &LocationQuery) -> TrackingSummary {
        let result = self.estimator.estimate_queries(pickup, drop).await;
        let summary = TrackingSummary::from_result(pickup, drop, &result);

        if let Some(reason) = &summary.fallback_reason {
            warn!(%reason, "Route estimation failed, showing placeholder estimate");
        }

        summary
    }

    /// Summarize a submitted booking
    pub async fn summary_for_booking(&self, booking: &DeliveryBooking) -> TrackingSummary {
        self.summary(&booking.pickup_location, &booking.drop_location)
            .await
    }
}
