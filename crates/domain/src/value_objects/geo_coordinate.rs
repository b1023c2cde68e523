//! Resolved geographic coordinate value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A geocoded place: latitude, longitude and the provider's canonical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoCoordinate")]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Human-readable address as resolved by the geocoding provider
    display_name: String,
}

#[derive(Deserialize)]
struct RawGeoCoordinate {
    latitude: f64,
    longitude: f64,
    display_name: String,
}

impl TryFrom<RawGeoCoordinate> for GeoCoordinate {
    type Error = DomainError;

    fn try_from(raw: RawGeoCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude, raw.display_name)
    }
}

impl GeoCoordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180] (NaN is rejected as well).
    pub fn new(
        latitude: f64,
        longitude: f64,
        display_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(latitude, longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            display_name: display_name.into(),
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the provider's resolved address
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Coordinate pair in `lon,lat` order, as routing services expect it
    #[must_use]
    pub fn lon_lat(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.6}, {:.6})",
            self.display_name, self.latitude, self.longitude
        )
    }
}
