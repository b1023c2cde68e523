//! Nominatim geocoding client
//!
//! Converts free-form place names to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Optional rate limiting (minimum interval between requests) and result
//! caching (TTL keyed by the lowercased query) are both off by default.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::{GeoCoordinate, LocationQuery};
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::DEFAULT_USER_AGENT;

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in minutes (0 to disable)
    #[serde(default)]
    pub cache_ttl_minutes: u64,

    /// Country code filter (e.g., "in" for India, empty for worldwide)
    #[serde(default = "default_country_filter")]
    pub country_filter: String,

    /// Minimum interval between requests in milliseconds (0 to disable)
    #[serde(default)]
    pub min_request_interval_ms: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

fn default_country_filter() -> String {
    "in".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            cache_ttl_minutes: 0,
            country_filter: default_country_filter(),
            min_request_interval_ms: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        url::Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Place could not be resolved to coordinates
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Rate limit exceeded
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

impl GeocodingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::RateLimitExceeded
                | Self::Timeout
        )
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to coordinates and the provider's canonical name
    ///
    /// Returns [`GeocodingError::AddressNotFound`] when the provider has no
    /// candidate for the query.
    async fn geocode(&self, query: &LocationQuery) -> Result<GeoCoordinate, GeocodingError>;
}

/// Nominatim-based geocoding client with optional rate limiting and caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, GeoCoordinate>>,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_minutes * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Mutex::new(None),
        })
    }

    /// Enforce the configured minimum interval between requests
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }

        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Turn the raw candidate list into a coordinate
    fn parse_candidates(query: &str, body: &str) -> Result<GeoCoordinate, GeocodingError> {
        let results: Vec<NominatimResult> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::AddressNotFound(query.to_string()))?;

        let lat: f64 = result
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", result.lat)))?;
        let lon: f64 = result
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", result.lon)))?;

        let display_name = result.display_name.unwrap_or_else(|| query.to_string());

        GeoCoordinate::new(lat, lon, display_name)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip_all, fields(query = %query))]
    async fn geocode(&self, query: &LocationQuery) -> Result<GeoCoordinate, GeocodingError> {
        let cache_key = query.normalized();
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&cache_key).await {
                debug!("Geocoding cache hit");
                return Ok(hit);
            }
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", query.as_str().to_string()),
            ("format", "json".to_string()),
            ("limit", "1".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!("Geocoding place");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let coordinate = Self::parse_candidates(query.as_str(), &body)?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, coordinate.clone()).await;
        }
        debug!(
            lat = coordinate.latitude(),
            lon = coordinate.longitude(),
            display_name = coordinate.display_name(),
            "Geocoded place"
        );

        Ok(coordinate)
    }
}

/// Raw Nominatim API response entry
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: Option<String>,
}
