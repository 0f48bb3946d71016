//! Integration tests for the Shodan client against a mock HTTP server.

use rangescout_client::{ScoutError, ShodanClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ShodanClient {
    ShodanClient::builder("test-key")
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn range_search_extracts_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .and(query_param("key", "test-key"))
        .and(query_param("query", "net:198.51.100.0/24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "matches": [
                {"ip_str": "198.51.100.10", "port": 80, "org": "Example"},
                {"ip_str": "198.51.100.10", "port": 443}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = client_for(&server)
        .search()
        .range_endpoints("198.51.100.0/24")
        .await
        .unwrap();

    assert_eq!(endpoints, vec!["198.51.100.10:80", "198.51.100.10:443"]);
}

#[tokio::test]
async fn empty_result_page_yields_no_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "matches": [],
            "total": 0
        })))
        .mount(&server)
        .await;

    let endpoints = client_for(&server)
        .search()
        .range_endpoints("203.0.113.0/24")
        .await
        .unwrap();

    assert!(endpoints.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .range("198.51.100.0/24")
        .await
        .unwrap_err();

    assert!(matches!(err, ScoutError::Unauthorized));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn service_error_carries_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shodan/host/search"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "Invalid search query"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .range("not-a-range")
        .await
        .unwrap_err();

    match err {
        ScoutError::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Invalid search query");
        }
        other => panic!("unexpected error: {other}"),
    }
}
