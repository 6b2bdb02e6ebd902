//! Tests for the page fetcher

use super::*;
use crate::endpoint::EndpointDescriptor;
use crate::http::{HttpClient, HttpClientConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

fn test_endpoint() -> EndpointDescriptor {
    EndpointDescriptor::new("things", "registry/things").with_fixed_param("status", "true")
}

#[tokio::test]
async fn test_fetch_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .and(query_param("pagina", "1"))
        .and(query_param("status", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultado": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint());
    let outcome = fetcher.fetch_page(None, 1).await;

    assert_eq!(outcome, FetchOutcome::Page(vec![json!({"id": 1}), json!({"id": 2})]));
    assert!(!outcome.ends_pagination());
}

#[tokio::test]
async fn test_fetch_page_missing_resultado_is_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalRegistros": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint());
    let outcome = fetcher.fetch_page(None, 1).await;

    assert_eq!(outcome, FetchOutcome::Page(vec![]));
    assert!(outcome.ends_pagination());
}

#[tokio::test]
async fn test_fetch_page_retries_then_succeeds() {
    let mock_server = MockServer::start().await;

    // First two attempts fail with 500, third succeeds.
    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultado": [{"id": 7}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint());
    let outcome = fetcher.fetch_page(None, 1).await;

    assert_eq!(outcome, FetchOutcome::Page(vec![json!({"id": 7})]));
}

#[tokio::test]
async fn test_fetch_page_exhausts_after_five_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(500))
        .expect(5)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint());
    let outcome = fetcher.fetch_page(None, 1).await;

    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(outcome.ends_pagination());
    // .expect(5) on the mock verifies exactly five requests were made.
}

#[tokio::test]
async fn test_fetch_page_retries_on_unparseable_body() {
    let mock_server = MockServer::start().await;

    // A 200 with a non-JSON body burns an attempt, like the transport errors.
    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultado": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint());
    let outcome = fetcher.fetch_page(None, 1).await;

    assert_eq!(outcome, FetchOutcome::Page(vec![]));
}

#[tokio::test]
async fn test_fetch_page_substitutes_key_and_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/details"))
        .and(query_param("pagina", "4"))
        .and(query_param("tamanhoPagina", "10"))
        .and(query_param("orgao", "00000000000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultado": [{"item": "a"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let endpoint = EndpointDescriptor::new("details", "registry/details")
        .with_page_size("tamanhoPagina", 10)
        .with_key_param("orgao");
    let fetcher = PageFetcher::new(client_for(&mock_server), endpoint);

    let outcome = fetcher.fetch_page(Some("00000000000001"), 4).await;
    assert_eq!(outcome, FetchOutcome::Page(vec![json!({"item": "a"})]));
}

#[tokio::test]
async fn test_with_max_attempts_floor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/registry/things"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Zero is clamped to a single attempt.
    let fetcher = PageFetcher::new(client_for(&mock_server), test_endpoint()).with_max_attempts(0);
    assert_eq!(fetcher.fetch_page(None, 1).await, FetchOutcome::Failed);
}
