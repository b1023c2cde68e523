//! Integration tests for the geocoding and routing clients (wiremock-based)

use domain::value_objects::{GeoCoordinate, LocationQuery};
use integration_routing::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient, OsrmConfig,
    OsrmRoutingClient, RoutingClient, RoutingError,
};
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoding_config_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        ..NominatimConfig::for_testing()
    }
}

fn routing_config_for_mock(base_url: &str) -> OsrmConfig {
    OsrmConfig {
        base_url: base_url.to_string(),
        ..OsrmConfig::for_testing()
    }
}

fn query(text: &str) -> LocationQuery {
    LocationQuery::new(text).unwrap()
}

const fn bangalore_json() -> &'static str {
    r#"[{
        "place_id": 1,
        "lat": "12.9767936",
        "lon": "77.590082",
        "display_name": "Bengaluru, Bangalore North, Bengaluru Urban, Karnataka, India"
    }]"#
}

const fn route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{"distance": 500000.0, "duration": 18000.0, "weight": 18000.0, "legs": []}],
        "waypoints": []
    }"#
}

// ============================================================================
// Geocoding
// ============================================================================

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Bangalore"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "in"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bangalore_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    let coord = client.geocode(&query("  Bangalore ")).await.unwrap();

    assert!((coord.latitude() - 12.976_793_6).abs() < 1e-9);
    assert!((coord.longitude() - 77.590_082).abs() < 1e-9);
    assert!(coord.display_name().starts_with("Bengaluru"));
}

#[tokio::test]
async fn test_geocode_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    let result = client.geocode(&query("Xyzzy Nowhere")).await;

    assert!(matches!(result, Err(GeocodingError::AddressNotFound(_))));
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    let err = client.geocode(&query("Bangalore")).await.unwrap_err();

    assert!(matches!(err, GeocodingError::RequestFailed(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_geocode_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    let result = client.geocode(&query("Bangalore")).await;

    assert!(matches!(result, Err(GeocodingError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_geocode_malformed_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    let result = client.geocode(&query("Bangalore")).await;

    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}

#[tokio::test]
async fn test_geocode_without_country_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"lat": "48.85", "lon": "2.35", "display_name": "Paris, France"}]"#,
        ))
        .mount(&server)
        .await;

    let config = NominatimConfig {
        country_filter: String::new(),
        ..geocoding_config_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();
    client.geocode(&query("Paris")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0]
            .url
            .query_pairs()
            .any(|(key, _)| key == "countrycodes")
    );
}

#[tokio::test]
async fn test_geocode_cache_avoids_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bangalore_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_minutes: 60,
        ..geocoding_config_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let first = client.geocode(&query("Bangalore")).await.unwrap();
    let second = client.geocode(&query("BANGALORE")).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_geocode_without_cache_requests_every_time() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(bangalore_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&geocoding_config_for_mock(&server.uri())).unwrap();
    client.geocode(&query("Bangalore")).await.unwrap();
    client.geocode(&query("Bangalore")).await.unwrap();
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/77.59,12.97;80.64,16.5"))
        .and(query_param("overview", "false"))
        .and(query_param("alternatives", "false"))
        .and(query_param("steps", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "Bengaluru").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "Vijayawada").unwrap();

    let estimate = client.route(&start, &end).await.unwrap();

    assert!((estimate.distance_km() - 500.0).abs() < f64::EPSILON);
    assert!((estimate.duration_min() - 300.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_route_success_without_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/77.59,12.97;80.64,16.5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"routes":[{"distance":500000,"duration":18000}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "Bengaluru").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "Vijayawada").unwrap();

    let estimate = client.route(&start, &end).await.unwrap();

    assert!((estimate.distance_km() - 500.0).abs() < f64::EPSILON);
    assert!((estimate.duration_min() - 300.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_route_uses_configured_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/cycling/77.59,12.97;77.64,12.97"))
        .respond_with(ResponseTemplate::new(200).set_body_string(route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = OsrmConfig {
        profile: "cycling".to_string(),
        ..routing_config_for_mock(&server.uri())
    };
    let client = OsrmRoutingClient::new(&config).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "a").unwrap();
    let end = GeoCoordinate::new(12.97, 77.64, "b").unwrap();

    assert!(client.route(&start, &end).await.is_ok());
}

#[tokio::test]
async fn test_route_no_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        ))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "Bengaluru").unwrap();
    let end = GeoCoordinate::new(-33.86, 151.2, "Sydney").unwrap();

    let err = client.route(&start, &end).await.unwrap_err();
    assert!(matches!(err, RoutingError::NoRouteFound));
    assert_eq!(err.to_string(), "No route found");
}

#[tokio::test]
async fn test_route_empty_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code": "Ok", "routes": []}"#),
        )
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "a").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "b").unwrap();

    assert!(matches!(
        client.route(&start, &end).await,
        Err(RoutingError::NoRouteFound)
    ));
}

#[tokio::test]
async fn test_route_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "a").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "b").unwrap();

    let err = client.route(&start, &end).await.unwrap_err();
    assert!(matches!(
        err,
        RoutingError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&routing_config_for_mock(&server.uri())).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "a").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "b").unwrap();

    let err = client.route(&start, &end).await.unwrap_err();
    assert!(matches!(err, RoutingError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_route_connection_refused() {
    // Nothing listens on the discard port
    let client = OsrmRoutingClient::new(&routing_config_for_mock("http://127.0.0.1:9")).unwrap();
    let start = GeoCoordinate::new(12.97, 77.59, "a").unwrap();
    let end = GeoCoordinate::new(16.5, 80.64, "b").unwrap();

    let err = client.route(&start, &end).await.unwrap_err();
    assert!(err.is_retryable());
}
