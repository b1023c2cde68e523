//! Geocoding adapter - Implements GeocodingPort using integration_routing

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, LocationQuery};
use integration_routing::{GeocodingClient, GeocodingError};
use tracing::{debug, instrument, warn};

use crate::retry::{RetryConfig, retry};

/// Adapter resolving places through a [`GeocodingClient`] (Nominatim in production)
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
    retry: Option<RetryConfig>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"<dyn GeocodingClient>")
            .field("retry", &self.retry)
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new geocoding adapter without retries
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
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

    /// Map a client error onto the application's error vocabulary
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::RateLimitExceeded => ApplicationError::RateLimited,
            GeocodingError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip_all, fields(query = %query))]
    async fn resolve(&self, query: &LocationQuery) -> Result<Option<GeoCoordinate>, ApplicationError> {
        let result = match &self.retry {
            Some(config) => retry(config, || self.client.geocode(query)).await,
            None => self.client.geocode(query).await,
        };

        match result {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(GeocodingError::AddressNotFound(_)) => {
                debug!("No geocoding candidate");
                Ok(None)
            },
            Err(e) => {
                warn!(error = %e, "Geocoding failed");
                Err(Self::map_error(e))
            },
        }
    }
}
