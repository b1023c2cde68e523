//! OSRM wire models
//!
//! Only the fields the estimate needs are modelled; OSRM sends much more.

use serde::{Deserialize, Serialize};

/// Top-level response of the OSRM `route` service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OsrmResponse {
    /// Status code, `Ok` on success (`NoRoute`, `InvalidQuery`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error detail accompanying a non-`Ok` code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Candidate routes, best first
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl OsrmResponse {
    /// Code OSRM uses when the points cannot be connected
    pub const NO_ROUTE: &'static str = "NoRoute";

    /// Check that the server did not report an error
    ///
    /// A response without a `code` counts as successful; the routes decide.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.as_deref().is_none_or(|code| code == "Ok")
    }

    /// Check if the server reported that no route exists
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        self.code.as_deref() == Some(Self::NO_ROUTE)
    }

    /// The best route, if any
    #[must_use]
    pub fn best_route(&self) -> Option<&OsrmRoute> {
        self.routes.first()
    }
}

/// A single route: total distance in meters, duration in seconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OsrmRoute {
    /// Distance in meters
    pub distance: f64,
    /// Duration in seconds
    pub duration: f64,
}
