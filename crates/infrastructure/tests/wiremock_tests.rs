//! End-to-end estimation against mocked Nominatim and OSRM servers

use application::{BookingForm, DebouncedTrigger, EstimateState, RouteEstimator};
use domain::RouteResult;
use infrastructure::wiring;
use infrastructure::{AppConfig, RetryConfig};
use integration_routing::{NominatimConfig, OsrmConfig};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mock(geocoding: &MockServer, routing: &MockServer) -> AppConfig {
    AppConfig {
        geocoding: NominatimConfig {
            base_url: geocoding.uri(),
            ..NominatimConfig::for_testing()
        },
        routing: OsrmConfig {
            base_url: routing.uri(),
            ..OsrmConfig::for_testing()
        },
        ..AppConfig::default()
    }
}

fn estimator(config: &AppConfig) -> std::sync::Arc<RouteEstimator> {
    wiring::route_estimator(config).unwrap()
}

async fn mount_place(server: &MockServer, query: &str, lat: &str, lon: &str, name: &str) {
    let body = format!(r#"[{{"lat": "{lat}", "lon": "{lon}", "display_name": "{name}"}}]"#);
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_bangalore_vijayawada(geocoding: &MockServer) {
    mount_place(
        geocoding,
        "Bangalore",
        "12.9767936",
        "77.590082",
        "Bengaluru, Karnataka, India",
    )
    .await;
    mount_place(
        geocoding,
        "Vijayawada",
        "16.5087586",
        "80.6185102",
        "Vijayawada, Andhra Pradesh, India",
    )
    .await;
}

const fn route_json() -> &'static str {
    r#"{"code": "Ok", "routes": [{"distance": 500000, "duration": 18000}]}"#
}

#[tokio::test]
async fn test_bangalore_to_vijayawada() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_bangalore_vijayawada(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/77.590082,12.9767936;80.6185102,16.5087586"))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(1)
        .mount(&routing)
        .await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("Bangalore", "Vijayawada")
        .await;

    let details = result.details().expect("successful estimate");
    assert!((details.distance_km() - 500.0).abs() < f64::EPSILON);
    assert!((details.duration_min() - 300.0).abs() < f64::EPSILON);
    assert_eq!(details.start_location(), "Bengaluru, Karnataka, India");
    assert_eq!(details.end_location(), "Vijayawada, Andhra Pradesh, India");
}

#[tokio::test]
async fn test_empty_input_makes_no_requests() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("", "Vijayawada")
        .await;

    assert_eq!(result.reason(), Some(RouteResult::MISSING_INPUT));
    assert!(geocoding.received_requests().await.unwrap().is_empty());
    assert!(routing.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_place_skips_routing() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_place(&geocoding, "Bangalore", "12.97", "77.59", "Bengaluru").await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Xyzzy Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&geocoding)
        .await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("Bangalore", "Xyzzy Nowhere")
        .await;

    assert_eq!(result.reason(), Some(RouteResult::UNRESOLVED_LOCATIONS));
    assert!(routing.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_geocoder_outage_is_unresolved() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&geocoding)
        .await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("Bangalore", "Vijayawada")
        .await;

    assert_eq!(result.reason(), Some(RouteResult::UNRESOLVED_LOCATIONS));
}

#[tokio::test]
async fn test_no_route() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_bangalore_vijayawada(&geocoding).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ))
        .mount(&routing)
        .await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("Bangalore", "Vijayawada")
        .await;

    assert_eq!(result.reason(), Some("No route found"));
}

#[tokio::test]
async fn test_router_outage_reports_cause() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_bangalore_vijayawada(&geocoding).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&routing)
        .await;

    let result = estimator(&config_for_mock(&geocoding, &routing))
        .estimate("Bangalore", "Vijayawada")
        .await;

    let reason = result.reason().expect("failure");
    assert!(reason.contains("502"), "reason: {reason}");
}

#[tokio::test]
async fn test_retry_recovers_from_transient_router_failure() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_bangalore_vijayawada(&geocoding).await;

    // wiremock picks the first matching mock that still has budget
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&routing)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .mount(&routing)
        .await;

    let config = AppConfig {
        retry: Some(RetryConfig::new(10, 50, 2.0, 2).without_jitter()),
        ..config_for_mock(&geocoding, &routing)
    };

    let result = estimator(&config).estimate("Bangalore", "Vijayawada").await;

    assert!(result.is_success());
    assert_eq!(routing.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_debounced_booking_flow() {
    let geocoding = MockServer::start().await;
    let routing = MockServer::start().await;
    mount_bangalore_vijayawada(&geocoding).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(1)
        .mount(&routing)
        .await;

    let config = config_for_mock(&geocoding, &routing);
    let (trigger, mut events) = DebouncedTrigger::new(
        estimator(&config),
        std::time::Duration::from_millis(50),
    );
    let mut form = BookingForm::new();

    for (pickup, drop) in [("Ban", "Vij"), ("Bangalore", "Vijay"), ("Bangalore", "Vijayawada")] {
        form.set_pickup(pickup);
        form.set_drop(drop);
        trigger.schedule(form.pickup(), form.drop_location());
    }

    let event = events.recv().await.expect("one estimation");
    assert!(form.apply_result(&event.start, &event.end, &event.result));
    assert!(matches!(form.state(), EstimateState::Ready(_)));
    assert_eq!(form.distance_text().as_deref(), Some("500.0 km"));

    let booking = form.submit().unwrap();
    assert_eq!(booking.pickup_location.as_str(), "Bangalore");
    assert!((booking.duration_min - 300.0).abs() < f64::EPSILON);
}
