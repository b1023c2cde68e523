//! Routing adapter - Implements RoutingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, RouteEstimate};
use integration_routing::{RoutingClient, RoutingError};
use tracing::{debug, instrument, warn};

use crate::retry::{RetryConfig, retry};

/// Adapter computing routes through a [`RoutingClient`] (OSRM in production)
pub struct RoutingAdapter {
    client: Arc<dyn RoutingClient>,
    retry: Option<RetryConfig>,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"<dyn RoutingClient>")
            .field("retry", &self.retry)
            .finish()
    }
}

impl RoutingAdapter {
    /// Create a new routing adapter without retries
    pub fn new(client: Arc<dyn RoutingClient>) -> Self {
        Self {
            client,
            retry: None,
        }
    }

    /// Retry transport failures with the given policy
    #[must_use]
    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    fn map_error(err: RoutingError) -> ApplicationError {
        match err {
            RoutingError::RateLimitExceeded { retry_after_secs } => {
                debug!(?retry_after_secs, "Routing service asked to back off");
                ApplicationError::RateLimited
            },
            RoutingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip_all, fields(from = %start.lon_lat(), to = %end.lon_lat()))]
    async fn route(
        &self,
        start: &GeoCoordinate,
        end: &GeoCoordinate,
    ) -> Result<Option<RouteEstimate>, ApplicationError> {
        let result = match &self.retry {
            Some(config) => retry(config, || self.client.route(start, end)).await,
            None => self.client.route(start, end).await,
        };

        match result {
            Ok(estimate) => Ok(Some(estimate)),
            Err(RoutingError::NoRouteFound) => Ok(None),
            Err(e) => {
                warn!(error = %e, "Routing failed");
                Err(Self::map_error(e))
            },
        }
    }
}
