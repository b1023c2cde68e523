//! Driving route port
//!
//! Computes a driving distance and duration between two resolved
//! coordinates. Implementations return kilometers and minutes.

use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, RouteEstimate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute the driving route summary between two coordinates
    ///
    /// Returns `Ok(None)` when the provider found no route.
    async fn route(
        &self,
        start: &GeoCoordinate,
        end: &GeoCoordinate,
    ) -> Result<Option<RouteEstimate>, ApplicationError>;
}
