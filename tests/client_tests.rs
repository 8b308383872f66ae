//! Wire-level tests for the request/response pipeline.
//!
//! Every resource service shares the same pipeline, so products stand in for
//! the rest: envelope decoding, query encoding, headers, and the error paths
//! exercised here apply uniformly.

use shopify_rest::{
    AccessToken, ApiVersion, App, Client, Error, ListOptions, Product,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .app(App::new("test-api-key", "test-api-secret").unwrap())
        .base_url(server.uri())
        .token(AccessToken::new("shpat_test_token").unwrap())
        .version(ApiVersion::V2024_07)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_decodes_single_resource_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products/632910392.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test_token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "product": {"id": 632910392, "title": "IPod Nano - 8GB"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let product = client.products().get(632910392, None).await.unwrap();

    assert_eq!(product.id, Some(632910392));
    assert_eq!(product.title.as_deref(), Some("IPod Nano - 8GB"));
}

#[tokio::test]
async fn test_list_options_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products.json"))
        .and(query_param("since_id", "100"))
        .and(query_param("limit", "5"))
        .and(query_param("ids", "1,2,3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"products": []})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let options = ListOptions {
        ids: Some(vec![1, 2, 3]),
        limit: Some(5),
        since_id: Some(100),
        ..ListOptions::default()
    };
    let products = client.products().list(Some(&options)).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_count_unwraps_count_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 42})))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert_eq!(client.products().count(None).await.unwrap(), 42);
}

#[tokio::test]
async fn test_create_wraps_body_and_skips_read_only_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-07/products.json"))
        .and(body_json(serde_json::json!({
            "product": {"title": "Burton Custom Freestyle 151"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "product": {"id": 1071559748, "title": "Burton Custom Freestyle 151"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let product = Product {
        title: Some("Burton Custom Freestyle 151".to_string()),
        ..Product::default()
    };
    let created = client.products().create(&product).await.unwrap();
    assert_eq!(created.id, Some(1071559748));
}

#[tokio::test]
async fn test_delete_succeeds_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2024-07/products/632910392.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    client.products().delete(632910392).await.unwrap();
}

#[tokio::test]
async fn test_not_found_surfaces_status_and_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products/999.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"errors": "Not Found"}))
                .insert_header("x-request-id", "abc-123"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let error = client.products().get(999, None).await.unwrap_err();

    match error {
        Error::Status(status) => {
            assert_eq!(status.status, 404);
            assert_eq!(status.errors, Some(serde_json::json!("Not Found")));
            assert_eq!(status.request_id.as_deref(), Some("abc-123"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_errors_keep_field_structure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2024-07/products.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "errors": {"title": ["can't be blank"]}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let error = client
        .products()
        .create(&Product::default())
        .await
        .unwrap_err();

    match error {
        Error::Status(status) => {
            assert_eq!(status.status, 422);
            assert_eq!(
                status.errors,
                Some(serde_json::json!({"title": ["can't be blank"]}))
            );
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_throttled_response_carries_call_limit_and_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"errors": "Exceeded 2 calls per second"}))
                .insert_header("x-shopify-shop-api-call-limit", "40/40")
                .insert_header("retry-after", "2.0"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let error = client.products().list(None).await.unwrap_err();

    match error {
        Error::Status(status) => {
            assert_eq!(status.status, 429);
            let limit = status.call_limit.unwrap();
            assert_eq!(limit.used, 40);
            assert_eq!(limit.max, 40);
            assert_eq!(status.retry_after, Some(2.0));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let error = client.products().get(1, None).await.unwrap_err();
    assert!(matches!(error, Error::Decoding(_)));
}

#[tokio::test]
async fn test_asset_get_selects_by_bracketed_key_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/themes/828155753/assets.json"))
        .and(query_param("asset[key]", "templates/index.liquid"))
        .and(query_param("theme_id", "828155753"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "asset": {
                "key": "templates/index.liquid",
                "content_type": "text/x-liquid",
                "theme_id": 828155753
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let asset = client
        .assets()
        .get(828155753, "templates/index.liquid")
        .await
        .unwrap();

    assert_eq!(asset.key.as_deref(), Some("templates/index.liquid"));
    assert_eq!(asset.theme_id, Some(828155753));
}

#[tokio::test]
async fn test_customer_address_default_action_puts_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(
            "/admin/api/2024-07/customers/207119551/addresses/1053317288/default.json",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customer_address": {"id": 1053317288, "customer_id": 207119551, "default": true}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let address = client
        .customer_addresses()
        .set_default(207119551, 1053317288)
        .await
        .unwrap();

    assert_eq!(address.id, Some(1053317288));
    assert_eq!(address.default, Some(true));
}

#[tokio::test]
async fn test_owner_scoped_metafields_nest_under_parent_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2024-07/products/632910392/metafields.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "metafields": [{"id": 1, "namespace": "inventory", "key": "warehouse"}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let metafields = client
        .products()
        .metafields(632910392)
        .list(None)
        .await
        .unwrap();

    assert_eq!(metafields.len(), 1);
    assert_eq!(metafields[0].key.as_deref(), Some("warehouse"));
}
