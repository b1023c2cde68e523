//! Application services - use cases built on top of the ports

mod booking_form;
mod debounced_trigger;
mod route_estimator;
mod session_service;
mod tracking_service;

pub use booking_form::{BookingForm, EstimateState};
pub use debounced_trigger::{DEFAULT_QUIET_PERIOD, DebouncedTrigger, EstimationEvent};
pub use route_estimator::RouteEstimator;
pub use session_service::SessionService;
pub use tracking_service::TrackingService;
