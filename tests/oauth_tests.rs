//! Tests for the access token exchange leg of the OAuth flow.
//!
//! URL building and callback signature checks are covered by unit tests;
//! these exercise the wire exchange against a mock server.

use shopify_rest::{App, Client, Error};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app() -> App {
    App::builder()
        .api_key("test-api-key")
        .api_secret("test-api-secret")
        .redirect_url("https://myapp.example.com/callback")
        .scope("read_products")
        .build()
        .unwrap()
}

async fn tokenless_client(app: &App, server: &MockServer) -> Client {
    Client::builder()
        .app(app.clone())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_exchange_code_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_json(serde_json::json!({
            "client_id": "test-api-key",
            "client_secret": "test-api-secret",
            "code": "authorization-code",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "shpat_issued_token",
            "scope": "read_products",
        })))
        .mount(&server)
        .await;

    let app = test_app();
    let client = tokenless_client(&app, &server).await;
    let token = app
        .exchange_code(&client, "authorization-code")
        .await
        .unwrap();

    assert_eq!(token.as_ref(), "shpat_issued_token");
}

#[tokio::test]
async fn test_rejected_code_surfaces_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_request",
        })))
        .mount(&server)
        .await;

    let app = test_app();
    let client = tokenless_client(&app, &server).await;
    let error = app.exchange_code(&client, "expired-code").await.unwrap_err();

    match error {
        Error::Status(status) => {
            assert_eq!(status.status, 400);
            assert_eq!(status.errors, Some(serde_json::json!("invalid_request")));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
