//! Delivery booking entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{LocationQuery, RouteEstimate};

/// A confirmed delivery request, handed from the booking form to tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryBooking {
    /// Pickup location as typed by the user
    pub pickup_location: LocationQuery,
    /// Drop location as typed by the user
    pub drop_location: LocationQuery,
    /// Estimated distance in kilometers
    pub distance_km: f64,
    /// Estimated duration in minutes
    pub duration_min: f64,
}

impl DeliveryBooking {
    /// Create a booking from both locations and a ready estimate
    #[must_use]
    pub const fn new(
        pickup_location: LocationQuery,
        drop_location: LocationQuery,
        estimate: RouteEstimate,
    ) -> Self {
        Self {
            pickup_location,
            drop_location,
            distance_km: estimate.distance_km(),
            duration_min: estimate.duration_min(),
        }
    }
}
