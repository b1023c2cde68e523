//! OSRM routing client
//!
//! Computes driving distance and duration between two coordinates using
//! the OSRM [`route` service](https://project-osrm.org/docs/v5.24.0/api/#route-service).

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, RouteEstimate};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::DEFAULT_USER_AGENT;
use crate::config::OsrmConfig;
use crate::error::RoutingError;
use crate::models::OsrmResponse;

/// Trait for road routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Compute the best route between two coordinates
    ///
    /// Returns [`RoutingError::NoRouteFound`] when the service answers but
    /// cannot connect the points.
    async fn route(
        &self,
        start: &GeoCoordinate,
        end: &GeoCoordinate,
    ) -> Result<RouteEstimate, RoutingError>;
}

/// Routing client for an OSRM server
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the route URL; OSRM takes coordinates as `lon,lat` pairs
    fn route_url(&self, start: &GeoCoordinate, end: &GeoCoordinate) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            start.lon_lat(),
            end.lon_lat()
        )
    }

    /// Interpret an OSRM response body given the HTTP status it came with
    fn parse_route_response(status: StatusCode, body: &str) -> Result<RouteEstimate, RoutingError> {
        let response = match serde_json::from_str::<OsrmResponse>(body) {
            Ok(response) => response,
            Err(_) if !status.is_success() => {
                return Err(RoutingError::RequestFailed(format!("HTTP {status}")));
            },
            Err(e) => return Err(RoutingError::ParseError(e.to_string())),
        };

        // OSRM answers NoRoute with HTTP 400
        if response.is_no_route() {
            return Err(RoutingError::NoRouteFound);
        }

        if !status.is_success() || !response.is_ok() {
            let detail = response
                .message
                .or(response.code)
                .unwrap_or_else(|| "unexpected response".to_string());
            return Err(RoutingError::RequestFailed(format!("HTTP {status}: {detail}")));
        }

        let route = response.best_route().ok_or(RoutingError::NoRouteFound)?;

        RouteEstimate::from_meters_and_seconds(route.distance, route.duration)
            .map_err(|e| RoutingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip_all, fields(from = %start.lon_lat(), to = %end.lon_lat()))]
    async fn route(
        &self,
        start: &GeoCoordinate,
        end: &GeoCoordinate,
    ) -> Result<RouteEstimate, RoutingError> {
        let url = self.route_url(start, end);
        let params = [
            ("overview", "false"),
            ("alternatives", "false"),
            ("steps", "false"),
        ];

        debug!(%url, "Requesting route");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let result = Self::parse_route_response(status, &body);
        match &result {
            Ok(estimate) => debug!(
                distance_km = estimate.distance_km(),
                duration_min = estimate.duration_min(),
                "Route found"
            ),
            Err(RoutingError::NoRouteFound) => debug!("No route between points"),
            Err(e) => warn!(error = %e, "Routing request failed"),
        }
        result
    }
}
