//! Text rendering of estimation results

use application::BookingForm;
use domain::{RouteResult, TrackingSummary};

/// Multi-line summary of a one-shot estimate
pub fn route_result(result: &RouteResult) -> String {
    match result {
        RouteResult::Success(details) => format!(
            "From:     {}\nTo:       {}\nDistance: {:.1} km\nDuration: {} min",
            details.start_location(),
            details.end_location(),
            details.distance_km(),
            details.estimate().duration_min_ceil()
        ),
        RouteResult::Failure { reason } => format!("Unable to calculate: {reason}"),
    }
}

/// The booking form's estimate panel as one line
pub fn form_panel(form: &BookingForm) -> Option<String> {
    let headline = form.distance_text()?;
    Some(match form.detail_text() {
        Some(detail) => format!("{headline} | {detail}"),
        None => headline,
    })
}

/// Tracking view of a delivery
pub fn tracking(summary: &TrackingSummary) -> String {
    let mut out = format!(
        "Pickup:   {}\nDrop:     {}\nDistance: {:.1} km\nETA:      {} min",
        summary.start_location,
        summary.end_location,
        summary.estimate.distance_km(),
        summary.estimate.duration_min_ceil()
    );
    if let Some(reason) = &summary.fallback_reason {
        out.push_str(&format!("\n(estimated: {reason})"));
    }
    out
}

#[cfg(test)]
mod tests {
    use domain::RouteDetails;
    use domain::value_objects::{GeoCoordinate, LocationQuery, RouteEstimate};

    use super::*;

    fn success() -> RouteResult {
        RouteResult::from(RouteDetails::new(
            GeoCoordinate::new(12.97, 77.59, "Bengaluru").unwrap(),
            GeoCoordinate::new(16.5, 80.64, "Vijayawada").unwrap(),
            RouteEstimate::new(500.0, 300.0).unwrap(),
        ))
    }

    #[test]
    fn renders_success() {
        let text = route_result(&success());
        assert!(text.contains("From:     Bengaluru"));
        assert!(text.contains("Distance: 500.0 km"));
        assert!(text.contains("Duration: 300 min"));
    }

    #[test]
    fn renders_failure() {
        let text = route_result(&RouteResult::failure(RouteResult::NO_ROUTE));
        assert_eq!(text, "Unable to calculate: No route found");
    }

    #[test]
    fn form_panel_follows_state() {
        let mut form = BookingForm::new();
        assert!(form_panel(&form).is_none());

        form.set_pickup("Bangalore");
        form.set_drop("Vijayawada");
        assert_eq!(
            form_panel(&form).as_deref(),
            Some("Calculating... | Finding the best route...")
        );

        form.apply_result("Bangalore", "Vijayawada", &success());
        assert_eq!(
            form_panel(&form).as_deref(),
            Some("500.0 km | Approximate delivery time: 300 minutes")
        );
    }

    #[test]
    fn tracking_marks_placeholder() {
        let pickup = LocationQuery::new("MG Road").unwrap();
        let drop = LocationQuery::new("Whitefield").unwrap();
        let summary = TrackingSummary::from_result(
            &pickup,
            &drop,
            &RouteResult::failure(RouteResult::UNRESOLVED_LOCATIONS),
        );

        let text = tracking(&summary);
        assert!(text.contains("Distance: 12.5 km"));
        assert!(text.contains("ETA:      25 min"));
        assert!(text.contains("Could not find coordinates"));
    }
}
