//! Domain entities - Results and records produced by the estimation pipeline

mod delivery_booking;
mod route_result;
mod tracking_summary;
mod user_profile;

pub use delivery_booking::DeliveryBooking;
pub use route_result::{RouteDetails, RouteResult};
pub use tracking_summary::TrackingSummary;
pub use user_profile::UserProfile;
