//! Integration tests for `OptionApiClient::fetch_options`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy paths (internal node, leaf) and
//! every error variant `fetch_options` can produce.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tradein_scraper::{AttributePath, OptionApiClient, ScrapeError};

/// Builds an `OptionApiClient` pointed at the mock server's `/api.php`.
fn test_client(server: &MockServer) -> OptionApiClient {
    let endpoint = format!("{}/api.php", server.uri());
    OptionApiClient::new(&endpoint, "apple-phone", 5, "tradein-test/0.1")
        .expect("failed to build test OptionApiClient")
}

fn seed() -> AttributePath {
    AttributePath::seed(["apple", "iphone"], 10)
}

// ---------------------------------------------------------------------------
// Happy path – internal node
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_options_parses_an_internal_node() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(body_json(json!({
            "product_group": "apple-phone",
            "attr_options": ["apple", "iphone"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "productList": [
                {"url": "a1", "name": "iPhone 16"},
                {"url": "a2", "name": "iPhone 16 Pro"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let node = client.fetch_options(&seed()).await.unwrap();

    assert!(!node.is_leaf(), "an option list is not a leaf");
    assert_eq!(node.product_list.len(), 2);
    assert_eq!(node.product_list[0].url.as_deref(), Some("a1"));
    assert_eq!(node.product_list[1].name.as_deref(), Some("iPhone 16 Pro"));
}

// ---------------------------------------------------------------------------
// Happy path – leaf node
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_options_parses_a_leaf_node() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "productList": [{"price_6": 500, "price_4": 400}],
            "selectedOptionList": [
                {"option_name": "iPhone 16"},
                {"option_name": "Unlocked"},
                {"option_name": "128GB"}
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let node = client.fetch_options(&seed()).await.unwrap();

    assert!(node.is_leaf(), "first product exposes the top tier price");
    assert_eq!(node.selected_option_list.len(), 3);
    assert_eq!(node.selected_option_list[2].option_name, "128GB");
}

// ---------------------------------------------------------------------------
// Request shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_options_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(header("user-agent", "tradein-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"productList": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_options(&seed()).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

// ---------------------------------------------------------------------------
// Error variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_options_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_options(&seed()).await;
    assert!(
        matches!(result, Err(ScrapeError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_options_maps_500_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_options(&seed()).await;
    assert!(
        matches!(result, Err(ScrapeError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_options_maps_unparseable_body_to_deserialize() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_options(&seed()).await;
    assert!(
        matches!(result, Err(ScrapeError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_options_surfaces_connection_failure_as_http() {
    // Bind-then-drop leaves a port with nothing listening.
    let server = MockServer::start().await;
    let endpoint = format!("{}/api.php", server.uri());
    drop(server);

    let client = OptionApiClient::new(&endpoint, "apple-phone", 5, "tradein-test/0.1").unwrap();
    let result = client.fetch_options(&seed()).await;
    assert!(
        matches!(result, Err(ScrapeError::Http(_))),
        "expected Http, got: {result:?}"
    );
}
