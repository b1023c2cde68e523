//! Retry with exponential backoff
//!
//! Adapters wrap their client calls in [`retry`] when a [`RetryConfig`] is
//! configured. Only errors reporting themselves as [`Retryable`] are
//! retried; "not found" and "no route" answers are returned immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::retry::{RetryConfig, retry};
//!
//! let config = RetryConfig::default();
//! let coordinate = retry(&config, || client.geocode(&query)).await?;
//! ```

use std::future::Future;
use std::time::{Duration, Instant};

use integration_routing::{GeocodingError, RoutingError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Configuration for retry behavior with exponential backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Delay before the first retry in milliseconds
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Upper bound for a single delay in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Backoff multiplier applied per attempt
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Maximum number of retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Randomize delays by up to `jitter_factor`
    #[serde(default = "default_true")]
    pub jitter_enabled: bool,

    /// Maximum jitter as a fraction of the delay (0.0 to 1.0)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

const fn default_initial_delay() -> u64 {
    200
}

const fn default_max_delay() -> u64 {
    5_000
}

const fn default_multiplier() -> f64 {
    2.0
}

const fn default_max_retries() -> u32 {
    2
}

const fn default_true() -> bool {
    true
}

const fn default_jitter_factor() -> f64 {
    0.1
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            multiplier: default_multiplier(),
            max_retries: default_max_retries(),
            jitter_enabled: default_true(),
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with custom parameters
    #[must_use]
    pub const fn new(
        initial_delay_ms: u64,
        max_delay_ms: u64,
        multiplier: f64,
        max_retries: u32,
    ) -> Self {
        Self {
            initial_delay_ms,
            max_delay_ms,
            multiplier,
            max_retries,
            jitter_enabled: true,
            jitter_factor: 0.1,
        }
    }

    /// Disable jitter (deterministic delays, for tests)
    #[must_use]
    pub const fn without_jitter(mut self) -> Self {
        self.jitter_enabled = false;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.multiplier < 1.0 {
            return Err("multiplier must be at least 1.0".to_string());
        }

        if !(0.0..=1.0).contains(&self.jitter_factor) {
            return Err("jitter_factor must be between 0.0 and 1.0".to_string());
        }

        if self.initial_delay_ms > self.max_delay_ms {
            return Err("initial_delay_ms must not exceed max_delay_ms".to_string());
        }

        Ok(())
    }

    /// Delay before retry number `attempt` (0-indexed)
    ///
    /// `initial_delay * multiplier^attempt`, capped at `max_delay`, then
    /// jittered.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_delay = (self.initial_delay_ms as f64) * self.multiplier.powi(attempt as i32);
        let capped_delay = base_delay.min(self.max_delay_ms as f64);

        let final_delay = if self.jitter_enabled && self.jitter_factor > 0.0 {
            let jitter_range = capped_delay * self.jitter_factor;
            let jitter = rand::rng().random_range(-jitter_range..=jitter_range);
            (capped_delay + jitter).max(0.0)
        } else {
            capped_delay
        };

        Duration::from_millis(final_delay as u64)
    }
}

/// Errors that can be checked for retryability
pub trait Retryable {
    /// Returns true if the failed operation may succeed when repeated
    fn is_retryable(&self) -> bool;
}

impl Retryable for application::ApplicationError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

impl Retryable for GeocodingError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

impl Retryable for RoutingError {
    fn is_retryable(&self) -> bool {
        Self::is_retryable(self)
    }
}

/// Final result of a retried operation plus attempt metadata
#[derive(Debug)]
pub struct RetryResult<T, E> {
    /// The result of the last attempt
    pub result: Result<T, E>,
    /// Number of attempts made (1 = no retries)
    pub attempts: u32,
    /// Total time spent including delays
    pub total_duration: Duration,
}

impl<T, E> RetryResult<T, E> {
    /// Convert to a plain `Result`, discarding metadata
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

/// Run `operation`, retrying retryable failures according to `config`
#[allow(clippy::cast_possible_truncation)]
pub async fn with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> RetryResult<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;

        let err = match operation().await {
            Ok(value) => {
                if attempts > 1 {
                    debug!(attempts, "Operation succeeded after retries");
                }
                return RetryResult {
                    result: Ok(value),
                    attempts,
                    total_duration: start.elapsed(),
                };
            },
            Err(err) => err,
        };

        let retry_attempt = attempts - 1;
        if !err.is_retryable() || retry_attempt >= config.max_retries {
            if err.is_retryable() {
                warn!(attempts, error = %err, "Operation failed after max retries");
            }
            return RetryResult {
                result: Err(err),
                attempts,
                total_duration: start.elapsed(),
            };
        }

        let delay = config.delay_for_attempt(retry_attempt);
        warn!(
            attempt = attempts,
            max_retries = config.max_retries,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "Operation failed, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Like [`with_retry`], returning only the result
pub async fn retry<F, Fut, T, E>(config: &RetryConfig, operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retryable + std::fmt::Display,
{
    with_retry(config, operation).await.into_result()
}
