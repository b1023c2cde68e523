//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the Nominatim and OSRM clients,
//! and provides configuration loading, logging setup, the retry policy and
//! the session stores.

pub mod adapters;
pub mod config;
pub mod retry;
pub mod session;
pub mod telemetry;
pub mod wiring;

pub use adapters::*;
pub use config::{AppConfig, EstimatorConfig, SessionConfig};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
pub use session::{FileSessionStore, InMemorySessionStore};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
