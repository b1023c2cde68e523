//! Value Objects - Immutable, identity-less domain primitives

mod geo_coordinate;
mod location_query;
mod route_estimate;

pub use geo_coordinate::GeoCoordinate;
pub use location_query::LocationQuery;
pub use route_estimate::RouteEstimate;
