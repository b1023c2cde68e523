//! Route estimation service
//!
//! Geocodes two free-text places concurrently, routes between them and
//! folds every outcome into a [`RouteResult`]. The estimator never returns
//! an error: empty input, unresolved places, missing routes and transport
//! failures all become a `Failure` with a displayable reason.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::{GeoCoordinate, LocationQuery};
use domain::{RouteDetails, RouteResult};
use tracing::{debug, info, instrument, warn};

use crate::ports::{GeocodingPort, RoutingPort};

/// Orchestrates geocoding and routing into a single route estimate
#[derive(Clone)]
pub struct RouteEstimator {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
}

impl fmt::Debug for RouteEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEstimator")
            .field("geocoder", &"<dyn GeocodingPort>")
            .field("router", &"<dyn RoutingPort>")
            .finish()
    }
}

impl RouteEstimator {
    /// Create a new estimator over the given ports
    pub fn new(geocoder: Arc<dyn GeocodingPort>, router: Arc<dyn RoutingPort>) -> Self {
        Self { geocoder, router }
    }

    /// Estimate the driving route between two free-text places
    ///
    /// Empty input on either side fails with `"missing input"` before any
    /// port is called.
    #[instrument(skip(self))]
    pub async fn estimate(&self, start_text: &str, end_text: &str) -> RouteResult {
        let (Ok(start), Ok(end)) = (LocationQuery::new(start_text), LocationQuery::new(end_text))
        else {
            debug!("Missing location input, skipping estimation");
            return RouteResult::failure(RouteResult::MISSING_INPUT);
        };

        self.estimate_queries(&start, &end).await
    }

    /// Estimate the driving route between two validated queries
    #[instrument(skip_all, fields(start = %start, end = %end))]
    pub async fn estimate_queries(&self, start: &LocationQuery, end: &LocationQuery) -> RouteResult {
        let (start_coord, end_coord) =
            tokio::join!(self.resolve_side("start", start), self.resolve_side("end", end));

        let (Some(start_coord), Some(end_coord)) = (start_coord, end_coord) else {
            return RouteResult::failure(RouteResult::UNRESOLVED_LOCATIONS);
        };

        match self.router.route(&start_coord, &end_coord).await {
            Ok(Some(estimate)) => {
                info!(
                    distance_km = estimate.distance_km(),
                    duration_min = estimate.duration_min(),
                    "Route estimated"
                );
                RouteResult::from(RouteDetails::new(start_coord, end_coord, estimate))
            },
            Ok(None) => {
                warn!("No route between resolved locations");
                RouteResult::failure(RouteResult::NO_ROUTE)
            },
            Err(e) => {
                warn!(error = %e, "Routing failed");
                RouteResult::failure(e.to_string())
            },
        }
    }

    /// Geocode one side; both not-found and transport errors yield `None`
    async fn resolve_side(&self, side: &'static str, query: &LocationQuery) -> Option<GeoCoordinate> {
        match self.geocoder.resolve(query).await {
            Ok(Some(coord)) => {
                debug!(side, %query, lat = coord.latitude(), lon = coord.longitude(), "Location resolved");
                Some(coord)
            },
            Ok(None) => {
                warn!(side, %query, "Location not found");
                None
            },
            Err(e) => {
                warn!(side, %query, error = %e, "Geocoding failed");
                None
            },
        }
    }
}
