//! Application configuration
//!
//! Loaded with the `config` crate from built-in defaults, an optional
//! `routewise.toml`, then `ROUTEWISE_*` environment variables, where `__`
//! separates nesting levels (e.g. `ROUTEWISE_GEOCODING__COUNTRY_FILTER=in`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use application::services::DEFAULT_QUIET_PERIOD;
use integration_routing::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;
use crate::telemetry::LoggingConfig;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "routewise.toml";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ROUTEWISE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM routing service
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Route estimation behavior
    #[serde(default)]
    pub estimator: EstimatorConfig,

    /// Retry policy for transport failures (absent = no retries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,
}

/// Route estimation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Quiet period before a debounced estimation fires, in milliseconds
    #[serde(default = "default_quiet_period_ms")]
    pub quiet_period_ms: u64,
}

#[allow(clippy::cast_possible_truncation)]
const fn default_quiet_period_ms() -> u64 {
    DEFAULT_QUIET_PERIOD.as_millis() as u64
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: default_quiet_period_ms(),
        }
    }
}

impl EstimatorConfig {
    /// The debounce quiet period
    #[must_use]
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

/// Session persistence settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// JSON file to persist the session in; in-memory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from `routewise.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required when given) and the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::build(path, environment())
    }

    fn build(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let loaded: Self = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        loaded.validate().map_err(config::ConfigError::Message)?;
        Ok(loaded)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.routing.validate().map_err(|e| format!("routing: {e}"))?;

        if self.estimator.quiet_period_ms == 0 {
            return Err("estimator: quiet_period_ms must be greater than 0".to_string());
        }

        if let Some(retry) = &self.retry {
            retry.validate().map_err(|e| format!("retry: {e}"))?;
        }

        self.logging.validate().map_err(|e| format!("logging: {e}"))?;

        if self
            .session
            .file
            .as_ref()
            .is_some_and(|f| f.as_os_str().is_empty())
        {
            return Err("session: file must not be empty".to_string());
        }

        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
