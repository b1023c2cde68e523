//! Builds the application services from an [`AppConfig`]

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{GeocodingPort, RoutingPort, SessionStore};
use application::{RouteEstimator, SessionService, TrackingService};
use integration_routing::{NominatimGeocodingClient, OsrmRoutingClient};
use tracing::debug;

use crate::adapters::{GeocodingAdapter, OfflineIdentity, RoutingAdapter};
use crate::config::{AppConfig, SessionConfig};
use crate::session::{FileSessionStore, InMemorySessionStore};

/// Geocoding port over Nominatim, with the configured retry policy
pub fn geocoding_port(config: &AppConfig) -> Result<Arc<dyn GeocodingPort>, ApplicationError> {
    let client = NominatimGeocodingClient::new(&config.geocoding)
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let mut adapter = GeocodingAdapter::new(Arc::new(client));
    if let Some(retry) = &config.retry {
        adapter = adapter.with_retry(retry.clone());
    }
    Ok(Arc::new(adapter))
}

/// Routing port over OSRM, with the configured retry policy
pub fn routing_port(config: &AppConfig) -> Result<Arc<dyn RoutingPort>, ApplicationError> {
    let client = OsrmRoutingClient::new(&config.routing)
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let mut adapter = RoutingAdapter::new(Arc::new(client));
    if let Some(retry) = &config.retry {
        adapter = adapter.with_retry(retry.clone());
    }
    Ok(Arc::new(adapter))
}

/// Route estimator wired to the configured services
pub fn route_estimator(config: &AppConfig) -> Result<Arc<RouteEstimator>, ApplicationError> {
    debug!(
        geocoding = %config.geocoding.base_url,
        routing = %config.routing.base_url,
        retry = config.retry.is_some(),
        "Building route estimator"
    );
    Ok(Arc::new(RouteEstimator::new(
        geocoding_port(config)?,
        routing_port(config)?,
    )))
}

/// Tracking service sharing the given estimator
pub fn tracking_service(estimator: Arc<RouteEstimator>) -> TrackingService {
    TrackingService::new(estimator)
}

/// Session store: file-backed when a file is configured, in-memory otherwise
pub fn session_store(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match &config.file {
        Some(path) => Arc::new(FileSessionStore::new(path.clone())),
        None => Arc::new(InMemorySessionStore::new()),
    }
}

/// Session service over the configured store, without a remote identity provider
pub fn session_service(config: &SessionConfig) -> SessionService {
    SessionService::new(Arc::new(OfflineIdentity::new()), session_store(config))
}
