//! Geocoding and road routing integration for Routewise
//!
//! Provides address geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and driving distance/duration via an [OSRM](https://project-osrm.org) routing server.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] resolves free-text
//! places to coordinates and is implemented by [`NominatimGeocodingClient`].
//! [`RoutingClient`] computes a route between two coordinates and is implemented by
//! [`OsrmRoutingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::value_objects::LocationQuery;
//! use integration_routing::{
//!     GeocodingClient, NominatimConfig, NominatimGeocodingClient, OsrmConfig,
//!     OsrmRoutingClient, RoutingClient,
//! };
//!
//! let geocoder = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let router = OsrmRoutingClient::new(&OsrmConfig::default())?;
//!
//! let from = geocoder.geocode(&LocationQuery::new("Bangalore")?).await?;
//! let to = geocoder.geocode(&LocationQuery::new("Vijayawada")?).await?;
//! let estimate = router.route(&from, &to).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{OsrmRoutingClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::RoutingError;
pub use geocoding::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
pub use models::{OsrmResponse, OsrmRoute};

/// User agent sent to both services (Nominatim rejects anonymous clients)
pub const DEFAULT_USER_AGENT: &str = concat!("Routewise/", env!("CARGO_PKG_VERSION"));
