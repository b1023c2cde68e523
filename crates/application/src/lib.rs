//! Application layer - Route estimation use cases and ports
//!
//! Orchestrates the geocoding and routing ports into a single route
//! estimate, and provides the consumer-side state the front end needs:
//! the debounced trigger, the booking form, the tracking summary and the
//! session lifecycle.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    BookingForm, DebouncedTrigger, EstimateState, EstimationEvent, RouteEstimator, SessionService,
    TrackingService,
};
