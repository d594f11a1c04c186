#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stillage_api::{ApiClient, Error, SessionStore};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let session = SessionStore::with_token(SecretString::from("test-token"));
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new(), session).unwrap();
    (server, client)
}

async fn setup_anonymous() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client =
        ApiClient::from_reqwest(&server.uri(), reqwest::Client::new(), SessionStore::new())
            .unwrap();
    (server, client)
}

// ── Auth header ─────────────────────────────────────────────────────

#[tokio::test]
async fn bearer_header_attached_when_token_present() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/units"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_units().await.unwrap();
}

#[tokio::test]
async fn no_bearer_header_when_anonymous() {
    let (server, client) = setup_anonymous().await;

    // Absence of the header is checked via received-request inspection.
    Mock::given(method("GET"))
        .and(path("/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client.list_units().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// ── 401 handling ────────────────────────────────────────────────────

#[tokio::test]
async fn unauthorized_clears_token_and_stops_reusing_it() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = client.list_containers().await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    assert!(!client.session().is_authenticated());

    // The follow-up call must go out without the stale token.
    client.list_units().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let unit_req = requests.iter().find(|r| r.url.path() == "/units").unwrap();
    assert!(unit_req.headers.get("authorization").is_none());
}

// ── Error normalization ─────────────────────────────────────────────

#[tokio::test]
async fn server_message_preferred_over_status_line() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/containers"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Name already taken"})),
        )
        .mount(&server)
        .await;

    let body = stillage_api::types::ContainerCreate {
        name: "oak barrel".into(),
        type_id: 1,
        product_id: None,
        quantity: None,
        unit_id: None,
        notes: None,
    };
    let err = client.create_container(&body).await.unwrap_err();
    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Name already taken");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn generic_status_line_when_body_has_no_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.get_product(7).await.unwrap_err();
    match err {
        Error::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP 500: Internal Server Error");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

// ── Empty bodies ────────────────────────────────────────────────────

#[tokio::test]
async fn delete_resolves_on_204_without_deserializing() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/containers/3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_container(3).await.unwrap();
}

// ── Wire casing ─────────────────────────────────────────────────────

#[tokio::test]
async fn container_create_body_is_camel_case_with_explicit_nulls() {
    let (server, client) = setup().await;

    let expected = json!({
        "name": "oak barrel",
        "typeId": 2,
        "productId": null,
        "quantity": 120.0,
        "unitId": 4,
        "notes": null
    });

    Mock::given(method("POST"))
        .and(path("/containers"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 10, "code": "C-010", "name": "oak barrel", "typeId": 2,
            "quantity": 120.0, "unitId": 4, "status": "Default"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_container(&stillage_api::types::ContainerCreate {
            name: "oak barrel".into(),
            type_id: 2,
            product_id: None,
            quantity: Some(120.0),
            unit_id: Some(4),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(created.code.as_deref(), Some("C-010"));
}

#[tokio::test]
async fn container_type_create_body_is_pascal_case() {
    let (server, client) = setup().await;

    let expected = json!({
        "Name": "vat",
        "Volume": 500.0,
        "UnitId": 1,
        "ProductTypeIds": [2, 3]
    });

    Mock::given(method("POST"))
        .and(path("/container-types"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Id": 5, "Name": "vat", "Volume": 500.0, "UnitId": 1,
            "ProductTypes": [{"ProductType": {"Id": 2, "Title": "wine"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_container_type(&stillage_api::types::ContainerTypeCreate {
            name: "vat".into(),
            volume: 500.0,
            unit_id: 1,
            product_type_ids: vec![2, 3],
        })
        .await
        .unwrap();

    // PascalCase response normalized through the same DTO.
    assert_eq!(created.id, 5);
    assert_eq!(created.name.as_deref(), Some("vat"));
    assert_eq!(created.product_types.len(), 1);
    assert_eq!(
        created.product_types[0]
            .product_type
            .as_ref()
            .unwrap()
            .title
            .as_deref(),
        Some("wine")
    );
}

#[tokio::test]
async fn camel_and_pascal_responses_normalize_identically() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "liters", "unitType": 2},
            {"Id": 2, "Title": "kilograms", "UnitType": 1}
        ])))
        .mount(&server)
        .await;

    let units = client.list_units().await.unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].title.as_deref(), Some("liters"));
    assert_eq!(units[0].unit_type, Some(2));
    assert_eq!(units[1].title.as_deref(), Some("kilograms"));
    assert_eq!(units[1].unit_type, Some(1));
}

// ── Path encoding ───────────────────────────────────────────────────

#[tokio::test]
async fn name_lookup_percent_encodes_the_segment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/container-types/name/oak%20vat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "name": "oak vat"})))
        .expect(1)
        .mount(&server)
        .await;

    let ct = client.get_container_type_by_name("oak vat").await.unwrap();
    assert_eq!(ct.id, 9);
}

// ── History ─────────────────────────────────────────────────────────

#[tokio::test]
async fn history_endpoints_use_the_containerhistory_base_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/containerhistory/container/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1, "containerId": 4, "productId": 2,
                "actionType": "Fill", "actionDate": "2024-06-15T10:30:00Z",
                "notes": "first fill", "createdAt": "2024-06-15T10:30:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let records = client.list_history_by_container(4).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].container_id, 4);
    assert_eq!(records[0].action_type.as_deref(), Some("Fill"));
}

#[tokio::test]
async fn recent_history_takes_a_count_segment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/containerhistory/recent/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_recent_history(5).await.unwrap();
}

// ── Auth endpoints ──────────────────────────────────────────────────

#[tokio::test]
async fn login_posts_the_identity_token() {
    let (server, client) = setup_anonymous().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"idToken": "google-id-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "service-jwt"})))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.login("google-id-token").await.unwrap();
    assert_eq!(resp.token, "service-jwt");
}
