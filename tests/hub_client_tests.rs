//! Integration tests for the Hub resource client.
//!
//! These tests run each Hub operation against a mock Hub: authenticate,
//! look up the caller, resolve a country, pick a shipping type and create a
//! basket.

use hub_api::auth::oauth::TOKEN_PATH;
use hub_api::hub::{BasketId, LineItem, ShippingAddress};
use hub_api::{BaseUrl, ClientId, ClientSecret, HttpError, HubClient, HubConfig, HubError, Session};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "flow-token";

/// Starts a mock Hub that accepts any client credentials
async fn start_hub() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 36000
        })))
        .mount(&server)
        .await;
    server
}

fn create_config(server: &MockServer) -> HubConfig {
    HubConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .client_id(ClientId::new("sample-client").unwrap())
        .client_secret(ClientSecret::new("sample-secret").unwrap())
        .build()
        .unwrap()
}

async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> HubClient {
    HubClient::connect(&create_config(server)).await.unwrap()
}

fn countries() -> serde_json::Value {
    json!([
        {"id": 1, "iso_code": "GB", "name": "United Kingdom"},
        {"id": 2, "iso_code": "IE", "name": "Ireland"}
    ])
}

fn shipping_types() -> serde_json::Value {
    json!([
        {"id": 10, "name": "UK Standard", "countries": [], "exclude_countries": false},
        {"id": 11, "name": "EU Express", "countries": [2], "exclude_countries": false},
        {"id": 12, "name": "UK Standard Saturday", "countries": [1], "exclude_countries": true}
    ])
}

fn ids(types: &[hub_api::hub::ShippingType]) -> Vec<u64> {
    types.iter().map(|t| t.id).collect()
}

// ============================================================================
// Identity
// ============================================================================

#[tokio::test]
async fn test_whoami_returns_profile() {
    let server = start_hub().await;
    mount_get(
        &server,
        "/api/v1/whoami",
        json!({"id": 3, "name": "Joe Bloggs", "organisation": 9, "email": "joe@example.com"}),
    )
    .await;
    let client = connect(&server).await;

    let me = client.whoami().await.unwrap();

    assert_eq!(me.name.as_deref(), Some("Joe Bloggs"));
    assert_eq!(me.field("organisation"), Some(&json!(9)));
    assert_eq!(me.extra.get("email"), Some(&json!("joe@example.com")));
}

#[tokio::test]
async fn test_whoami_with_nested_organisation() {
    let server = start_hub().await;
    mount_get(
        &server,
        "/api/v1/whoami",
        json!({"name": "Joe Bloggs", "organisation": {"id": 9, "name": "Car Parts"}}),
    )
    .await;
    let client = connect(&server).await;

    let me = client.whoami().await.unwrap();

    assert_eq!(me.name.as_deref(), Some("Joe Bloggs"));
    assert_eq!(me.field("organisation").unwrap()["name"], json!("Car Parts"));
}

#[tokio::test]
async fn test_whoami_with_rejected_token_is_transport_error() {
    let server = start_hub().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/whoami"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;
    let client = connect(&server).await;

    assert!(matches!(
        client.whoami().await,
        Err(HubError::Transport(HttpError::Response(ref e))) if e.code == 401
    ));
}

// ============================================================================
// Country lookup
// ============================================================================

#[tokio::test]
async fn test_country_lookup_resolves_known_code() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/country_codes", countries()).await;
    let client = connect(&server).await;

    assert_eq!(client.get_country_id_by_iso_code("GB").await.unwrap(), Some(1));
    assert_eq!(client.get_country_id_by_iso_code("IE").await.unwrap(), Some(2));
}

#[tokio::test]
async fn test_country_lookup_is_absent_for_unknown_or_lowercase_code() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/country_codes", countries()).await;
    let client = connect(&server).await;

    assert_eq!(client.get_country_id_by_iso_code("FR").await.unwrap(), None);
    assert_eq!(client.get_country_id_by_iso_code("gb").await.unwrap(), None);
}

#[tokio::test]
async fn test_country_lookup_on_empty_list_is_absent() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/country_codes", json!([])).await;
    let client = connect(&server).await;

    assert_eq!(client.get_country_id_by_iso_code("GB").await.unwrap(), None);
}

#[tokio::test]
async fn test_country_lookup_with_malformed_body_is_decode_error() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/country_codes", json!({"results": []})).await;
    let client = connect(&server).await;

    assert!(matches!(
        client.get_country_id_by_iso_code("GB").await,
        Err(HubError::Decode { ref path, .. }) if path == "/api/v1/country_codes"
    ));
}

// ============================================================================
// Shipping types
// ============================================================================

#[tokio::test]
async fn test_shipping_types_for_country() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/shipping_types", shipping_types()).await;
    let client = connect(&server).await;

    let for_gb = client.get_shipping_types_for_country(1, None).await.unwrap();
    let for_ie = client.get_shipping_types_for_country(2, None).await.unwrap();

    assert_eq!(ids(&for_gb), vec![10]);
    assert_eq!(ids(&for_ie), vec![10, 11, 12]);
}

#[tokio::test]
async fn test_shipping_types_with_name_filter() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/shipping_types", shipping_types()).await;
    let client = connect(&server).await;

    let standard = client
        .get_shipping_types_for_country(2, Some("UK Standard"))
        .await
        .unwrap();
    let express = client
        .get_shipping_types_for_country(1, Some("Express"))
        .await
        .unwrap();

    assert_eq!(ids(&standard), vec![10, 12]);
    assert!(express.is_empty());
}

#[tokio::test]
async fn test_unfiltered_shipping_types_keep_server_order() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/shipping_types", shipping_types()).await;
    let client = connect(&server).await;

    let all = client.shipping_types().await.unwrap();

    assert_eq!(ids(&all), vec![10, 11, 12]);
}

// ============================================================================
// Basket creation
// ============================================================================

fn sample_address(country_code: u64) -> ShippingAddress {
    ShippingAddress {
        company_name: "Joe Bloggs Car Parts".to_string(),
        recipient_name: "Joe Bloggs".to_string(),
        addr_line_1: "2 Somewhere Street".to_string(),
        addr_line_2: None,
        city: "Somewheretown".to_string(),
        county: None,
        postal_code: "SW1A 1AA".to_string(),
        country_code,
    }
}

#[tokio::test]
async fn test_create_basket_posts_all_fields() {
    let server = start_hub().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/baskets"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({
            "purchase_order_number": "TESTORDER0001",
            "shipping_address": {
                "company_name": "Joe Bloggs Car Parts",
                "recipient_name": "Joe Bloggs",
                "addr_line_1": "2 Somewhere Street",
                "city": "Somewheretown",
                "postal_code": "SW1A 1AA",
                "country_code": 1
            },
            "shipping_type": 10,
            "provisioning_instructions": "Use ResellerCom profile",
            "line_items": [{
                "product_code": "2200-48820-025",
                "quantity": 3,
                "prov_product_code": "UD-SIP-SER-PRV-PH"
            }],
            "name": "API Sample Order"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 4521, "name": "API Sample Order"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;

    let basket = client
        .create_basket(
            "TESTORDER0001",
            sample_address(1),
            10,
            "Use ResellerCom profile",
            vec![LineItem::new("2200-48820-025", 3).with_prov_product_code("UD-SIP-SER-PRV-PH")],
            "API Sample Order",
        )
        .await
        .unwrap();

    assert_eq!(basket.id, BasketId::Number(4521));
    assert_eq!(
        basket.web_url(client.base_url()).unwrap().as_str(),
        format!("{}/webstore/baskets/4521/", server.uri())
    );
}

#[tokio::test]
async fn test_create_basket_with_string_id() {
    let server = start_hub().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/baskets"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "b-4521"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connect(&server).await;

    let basket = client
        .create_basket(
            "PO",
            sample_address(1),
            10,
            "",
            vec![LineItem::new("SKU", 1)],
            "Order",
        )
        .await
        .unwrap();

    assert_eq!(basket.id, BasketId::from("b-4521"));
    assert_eq!(
        basket.web_url(client.base_url()).unwrap().as_str(),
        format!("{}/webstore/baskets/b-4521/", server.uri())
    );
}

#[tokio::test]
async fn test_create_basket_rejected_by_server() {
    let server = start_hub().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/baskets"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"errors": {"shipping_type": ["Invalid choice"]}})),
        )
        .mount(&server)
        .await;
    let client = connect(&server).await;

    let result = client
        .create_basket(
            "PO",
            sample_address(1),
            999,
            "",
            vec![LineItem::new("SKU", 1)],
            "Order",
        )
        .await;

    match result {
        Err(HubError::Transport(HttpError::Response(e))) => {
            assert_eq!(e.code, 400);
            assert!(e.message.contains("Invalid choice"));
        }
        other => panic!("Expected Transport error, got: {other:?}"),
    }
}

// ============================================================================
// Existing sessions
// ============================================================================

#[tokio::test]
async fn test_client_from_existing_session() {
    let server = start_hub().await;
    mount_get(&server, "/api/v1/whoami", json!({"name": "Reused"})).await;

    let session = Session::new(BaseUrl::new(server.uri()).unwrap(), TOKEN.to_string(), None);
    let client = HubClient::new(session, None).unwrap();

    assert_eq!(client.whoami().await.unwrap().name.as_deref(), Some("Reused"));
}
