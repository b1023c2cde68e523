//! Logging initialization
//!
//! Installs a global `tracing` subscriber: an `EnvFilter` (from `RUST_LOG`
//! when set, otherwise the configured filter) and a `fmt` layer writing
//! text or JSON to stderr.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directives (e.g., "info", "routewise=debug,reqwest=warn")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

impl LoggingConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directives do not parse.
    pub fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.filter)
            .map(|_| ())
            .map_err(|e| format!("invalid log filter '{}': {e}", self.filter))
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Filter directives did not parse
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Install the global subscriber
///
/// `RUST_LOG`, when set and valid, takes precedence over `config.filter`.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| TelemetryError::Filter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(format = %config.format, "Logging initialized");
    Ok(())
}
