//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod identity_port;
mod routing_port;
mod session_store;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use identity_port::MockIdentityPort;
pub use identity_port::IdentityPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
pub use routing_port::RoutingPort;
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, USER_KEY};
