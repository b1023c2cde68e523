//! Geocoding service port
//!
//! Resolves free-text place names to coordinates. Adapters in the
//! infrastructure layer implement this port over a geocoding API.

use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to its first matching coordinate
    ///
    /// Returns `Ok(None)` when the provider has no candidate for the query;
    /// transport and payload failures are returned as errors.
    async fn resolve(&self, query: &LocationQuery)
    -> Result<Option<GeoCoordinate>, ApplicationError>;
}
