//! Adapters implementing application ports
//!
//! Each client adapter wraps an external-service client and maps its errors
//! onto the port's `Ok(None)` / `ApplicationError` contract.

mod geocoding_adapter;
mod offline_identity;
mod routing_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use offline_identity::OfflineIdentity;
pub use routing_adapter::RoutingAdapter;
