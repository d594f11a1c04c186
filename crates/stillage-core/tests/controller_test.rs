#![allow(clippy::unwrap_used)]
// Integration tests for the Inventory controller using wiremock.
//
// These pin the write-merge contract: a successful create/update/delete
// mutates the local list exactly once, a failed one leaves it alone,
// and validation failures never reach the network.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stillage_api::{ApiClient, SessionStore};
use stillage_core::{
    ContainerInput, ContainerTypeInput, CoreError, Inventory, LoadPhase, UnitKind,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Inventory) {
    let server = MockServer::start().await;
    let client =
        ApiClient::from_reqwest(&server.uri(), reqwest::Client::new(), SessionStore::new())
            .unwrap();
    (server, Inventory::new(client))
}

fn container_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id, "code": format!("C-{id:03}"), "name": name,
        "typeId": 1, "quantity": 10.0, "unitId": 1, "status": "Active"
    })
}

async fn mount_reference_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/container-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1, "name": "oak barrel", "volume": 225.0, "unitId": 1,
            "productTypes": [{"productType": {"id": 2, "title": "wine"}}]
        }])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 100, "name": "merlot", "typeId": 2},
            {"id": 101, "name": "olive oil", "typeId": 3}
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/units"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "liters", "unitType": 2}
        ])))
        .mount(server)
        .await;
}

// ── Fetch state machine ─────────────────────────────────────────────

#[tokio::test]
async fn refresh_fills_the_store() {
    let (server, mut inv) = setup().await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            container_json(1, "barrel a"),
            container_json(2, "barrel b")
        ])))
        .mount(&server)
        .await;

    assert_eq!(*inv.containers().phase(), LoadPhase::Idle);
    inv.refresh_containers().await.unwrap();
    assert_eq!(*inv.containers().phase(), LoadPhase::Ready);
    assert_eq!(inv.containers().len(), 2);
    assert_eq!(inv.containers().get(1).unwrap().code.as_deref(), Some("C-001"));
}

#[tokio::test]
async fn failed_initial_fetch_enters_error_phase() {
    let (server, mut inv) = setup().await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
        .mount(&server)
        .await;

    let err = inv.refresh_containers().await.unwrap_err();
    assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
    assert_eq!(*inv.containers().phase(), LoadPhase::Error("db down".into()));
}

// ── Write merges ────────────────────────────────────────────────────

#[tokio::test]
async fn successful_create_appends_without_refetch() {
    let (server, mut inv) = setup().await;
    mount_reference_data(&server).await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([container_json(1, "barrel a")])),
        )
        .expect(1) // exactly one list call: the initial refresh
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(container_json(9, "barrel i")))
        .mount(&server)
        .await;

    inv.refresh_reference_data().await.unwrap();
    inv.refresh_containers().await.unwrap();

    let created = inv
        .create_container(ContainerInput {
            name: "barrel i".into(),
            type_id: 1,
            product_id: Some(100),
            quantity: Some(200.0),
            unit_id: None,
            notes: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(
        inv.containers()
            .items()
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>(),
        vec![1, 9]
    );
}

#[tokio::test]
async fn create_denormalizes_the_unit_from_the_type() {
    let (server, mut inv) = setup().await;
    mount_reference_data(&server).await;

    let expected_body = json!({
        "name": "barrel i", "typeId": 1, "productId": null,
        "quantity": 100.0, "unitId": 1, "notes": null
    });
    Mock::given(method("POST"))
        .and(path("/containers"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(container_json(9, "barrel i")))
        .expect(1)
        .mount(&server)
        .await;

    inv.refresh_reference_data().await.unwrap();
    inv.create_container(ContainerInput {
        name: "barrel i".into(),
        type_id: 1,
        product_id: None,
        quantity: Some(100.0),
        unit_id: None,
        notes: None,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn failed_create_leaves_the_list_untouched() {
    let (server, mut inv) = setup().await;
    mount_reference_data(&server).await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([container_json(1, "barrel a")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "duplicate"})))
        .mount(&server)
        .await;

    inv.refresh_reference_data().await.unwrap();
    inv.refresh_containers().await.unwrap();

    let err = inv
        .create_container(ContainerInput {
            name: "barrel a".into(),
            type_id: 1,
            ..ContainerInput::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Api { status: Some(400), .. }));
    assert_eq!(inv.containers().len(), 1);
    assert_eq!(*inv.containers().phase(), LoadPhase::Ready);
}

#[tokio::test]
async fn update_replaces_in_place_and_delete_removes() {
    let (server, mut inv) = setup().await;
    mount_reference_data(&server).await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            container_json(1, "barrel a"),
            container_json(2, "barrel b")
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(container_json(2, "renamed")))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/containers/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    inv.refresh_reference_data().await.unwrap();
    inv.refresh_containers().await.unwrap();

    inv.update_container(
        2,
        ContainerInput {
            name: "renamed".into(),
            type_id: 1,
            ..ContainerInput::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(
        inv.containers()
            .items()
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>(),
        vec![1, 2],
        "update keeps order"
    );
    assert_eq!(inv.containers().get(2).unwrap().name, "renamed");

    inv.delete_container(1).await.unwrap();
    assert_eq!(
        inv.containers()
            .items()
            .iter()
            .map(|c| c.id)
            .collect::<Vec<_>>(),
        vec![2]
    );
}

#[tokio::test]
async fn failed_delete_leaves_the_list_untouched() {
    let (server, mut inv) = setup().await;

    Mock::given(method("GET"))
        .and(path("/containers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([container_json(1, "barrel a")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/containers/1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "in use"})))
        .mount(&server)
        .await;

    inv.refresh_containers().await.unwrap();
    let err = inv.delete_container(1).await.unwrap_err();
    assert!(matches!(err, CoreError::Api { status: Some(409), .. }));
    assert_eq!(inv.containers().len(), 1);
}

// ── Pre-request validation ──────────────────────────────────────────

#[tokio::test]
async fn over_capacity_quantity_is_rejected_before_any_network_call() {
    let (server, mut inv) = setup().await;
    mount_reference_data(&server).await;

    Mock::given(method("POST"))
        .and(path("/containers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(container_json(9, "x")))
        .expect(0)
        .mount(&server)
        .await;

    inv.refresh_reference_data().await.unwrap();

    let err = inv
        .create_container(ContainerInput {
            name: "barrel i".into(),
            type_id: 1,
            quantity: Some(226.0),
            ..ContainerInput::default()
        })
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Quantity cannot be bigger than capacity (225 liters)."
    );
}

#[tokio::test]
async fn container_type_without_unit_fails_before_any_network_call() {
    let (server, mut inv) = setup().await;

    Mock::given(method("POST"))
        .and(path("/container-types"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = inv
        .create_container_type(ContainerTypeInput {
            name: "vat".into(),
            volume: 500.0,
            unit_id: None,
            product_type_ids: Vec::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Select unit.");
}

// ── Units & users ───────────────────────────────────────────────────

#[tokio::test]
async fn unit_create_sends_the_numeric_kind() {
    let (server, mut inv) = setup().await;

    Mock::given(method("POST"))
        .and(path("/units"))
        .and(body_json(json!({"Title": "liters", "UnitType": 2})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Id": 1, "Title": "liters", "UnitType": 2})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let unit = inv.create_unit("liters", UnitKind::Capacity).await.unwrap();
    assert_eq!(unit.kind, UnitKind::Capacity);
    assert_eq!(inv.units().len(), 1);
}

#[tokio::test]
async fn set_user_role_patches_the_local_record() {
    let (server, mut inv) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Anna", "surname": "Koval", "email": "a@b.c",
             "roleId": 2, "confirmed": true}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/1/role"))
        .and(body_json(json!({"roleId": 3})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    inv.refresh_users().await.unwrap();
    inv.set_user_role(1, 3).await.unwrap();
    assert_eq!(inv.users().get(1).unwrap().role_id, Some(3));
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_installs_the_session_token() {
    let (server, inv) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "Anna", "surname": "Koval", "email": "a@b.c",
            "roleId": 1, "confirmed": true
        })))
        .mount(&server)
        .await;

    assert!(!inv.client().session().is_authenticated());
    let token = inv.login("google-token").await.unwrap();
    assert_eq!(token, "jwt-1");
    assert!(inv.client().session().is_authenticated());

    let me = inv.current_user().await.unwrap();
    assert_eq!(me.email, "a@b.c");

    inv.logout();
    assert!(!inv.client().session().is_authenticated());
}
