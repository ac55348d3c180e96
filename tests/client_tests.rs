//! Integration tests for the request dispatcher.
//!
//! These tests verify credential placement, status classification, body
//! handling and transport failures against a mock Goodreads server.

use std::time::Duration;

use goodreads_api::{
    AccessToken, ApiKey, AuthRequirement, BaseUrl, ConfigError, ErrorKind, GoodreadsClient,
    GoodreadsConfig, GoodreadsError, HttpMethod, HttpRequest, Node,
};
use wiremock::matchers::{any, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn token() -> AccessToken {
    AccessToken::new("API_KEY", "SECRET_KEY", "ACCESS_TOKEN", "ACCESS_SECRET").unwrap()
}

fn key_client(server: &MockServer) -> GoodreadsClient {
    let config = GoodreadsConfig::builder()
        .api_key(ApiKey::new("SECRET_KEY").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    GoodreadsClient::new(config)
}

fn token_client(server: &MockServer) -> GoodreadsClient {
    let config = GoodreadsConfig::builder()
        .api_key(ApiKey::new("SECRET_KEY").unwrap())
        .access_token(token())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    GoodreadsClient::new(config)
}

fn get(request_path: &str) -> HttpRequest {
    HttpRequest::builder(HttpMethod::Get, request_path)
        .param("id", "12345")
        .build()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_requires_options_mapping() {
    for options in [None, Some(serde_json::json!("foo")), Some(serde_json::json!(42))] {
        let error = GoodreadsClient::from_options(options.as_ref()).unwrap_err();
        assert_eq!(error, ConfigError::OptionsRequired);
        assert_eq!(error.to_string(), "Options hash required.");
    }
}

#[test]
fn test_construction_from_options() {
    let client = GoodreadsClient::from_options(Some(&serde_json::json!({
        "api_key": "SECRET_KEY",
        "oauth_token": {
            "consumer_key": "API_KEY",
            "consumer_secret": "SECRET_KEY",
            "token": "ACCESS_TOKEN",
            "secret": "ACCESS_SECRET"
        }
    })))
    .unwrap();

    assert_eq!(client.config().api_key().unwrap().as_ref(), "SECRET_KEY");
    assert_eq!(client.config().access_token().unwrap().token(), "ACCESS_TOKEN");
}

// ============================================================================
// Credential placement
// ============================================================================

#[tokio::test]
async fn test_public_read_carries_format_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/isbn"))
        .and(query_param("format", "xml"))
        .and(query_param("key", "SECRET_KEY"))
        .and(query_param("isbn", "0307463745"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("book.xml")))
        .expect(1)
        .mount(&server)
        .await;

    let book = key_client(&server)
        .execute(
            HttpRequest::builder(HttpMethod::Get, "/book/isbn")
                .param("isbn", "0307463745")
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(book.text("id"), Some("6732019"));
    assert_eq!(book.text("title"), Some("Rework"));
}

#[tokio::test]
async fn test_user_call_is_signed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth_user"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("oauth_response.xml")))
        .expect(1)
        .mount(&server)
        .await;

    let user = token_client(&server)
        .execute(
            HttpRequest::builder(HttpMethod::Get, "/api/auth_user")
                .auth(AuthRequirement::User)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(user.text("id"), Some("2003928"));
    assert_eq!(user.text("name"), Some("Jan"));
}

#[tokio::test]
async fn test_user_call_without_token_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = key_client(&server)
        .execute(
            HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
                .param("book_id", 1_157_446)
                .param("name", "to-read")
                .auth(AuthRequirement::User)
                .build(),
        )
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert!(matches!(
        error,
        GoodreadsError::Config(ConfigError::MissingAccessToken { path: ref failed }) if failed == "/shelf/add_to_shelf.xml"
    ));
}

#[tokio::test]
async fn test_public_call_without_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = GoodreadsConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let error = GoodreadsClient::new(config)
        .execute(get("/book/show"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        GoodreadsError::Config(ConfigError::MissingApiKey)
    ));
}

// ============================================================================
// Status classification
// ============================================================================

async fn error_for_status(status: u16, body: &str) -> GoodreadsError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/author/show"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    key_client(&server)
        .execute(get("/author/show"))
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_404_is_not_found_regardless_of_body() {
    let error = error_for_status(404, "").await;
    assert!(matches!(error, GoodreadsError::NotFound(_)));
    assert_eq!(error.status(), Some(404));

    let error = error_for_status(404, &fixture("author.xml")).await;
    assert!(matches!(error, GoodreadsError::NotFound(_)));
}

#[tokio::test]
async fn test_401_is_unauthorized() {
    let error = error_for_status(401, "Invalid API key.").await;
    assert!(matches!(error, GoodreadsError::Unauthorized(_)));
    assert_eq!(error.response().unwrap().body, "Invalid API key.");
}

#[tokio::test]
async fn test_422_is_validation_failed() {
    let error = error_for_status(422, "<errors><error>Book already on shelf</error></errors>").await;
    assert!(matches!(error, GoodreadsError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_5xx_is_service_unavailable() {
    for status in [500, 502, 503] {
        let error = error_for_status(status, "not xml at all").await;
        assert!(matches!(error, GoodreadsError::ServiceUnavailable(_)));
        assert_eq!(error.status(), Some(status));
    }
}

#[tokio::test]
async fn test_other_statuses_are_unexpected() {
    for status in [400, 403, 429] {
        let error = error_for_status(status, "").await;
        assert_eq!(error.kind(), ErrorKind::UnexpectedResponse);
    }
}

// ============================================================================
// Body handling
// ============================================================================

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shelf/add_to_shelf.xml"))
        .and(query_param("a", "remove"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let node = token_client(&server)
        .execute(
            HttpRequest::builder(HttpMethod::Post, "/shelf/add_to_shelf.xml")
                .param("book_id", 1_157_446)
                .param("name", "to-read")
                .param("a", "remove")
                .auth(AuthRequirement::User)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(node, Node::Null);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/show"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<GoodreadsResponse><book>"))
        .mount(&server)
        .await;

    let error = key_client(&server)
        .execute(get("/book/show"))
        .await
        .unwrap_err();

    assert!(matches!(error, GoodreadsError::MalformedResponse(_)));
    assert_eq!(error.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/book/show"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fixture("book.xml"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/book/show")
        .param("id", 1)
        .timeout(Duration::from_millis(50))
        .build();
    let error = key_client(&server).execute(request).await.unwrap_err();

    assert!(matches!(error, GoodreadsError::Transport(_)));
    assert_eq!(error.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/show"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("user.xml")))
        .expect(4)
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(key_client(&server));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.execute(get("/user/show")).await })
        })
        .collect();

    for handle in handles {
        let user = handle.await.unwrap().unwrap();
        assert_eq!(user.text("user_name"), Some("janmt"));
    }
}
