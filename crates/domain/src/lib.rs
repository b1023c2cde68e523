//! Domain layer for Routewise
//!
//! Contains the route-estimation vocabulary: location queries, resolved
//! coordinates, route estimates and the tagged result handed to callers,
//! plus the booking and session entities that consume them.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
