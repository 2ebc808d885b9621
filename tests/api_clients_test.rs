/// Integration tests for the `/api/clients` endpoints.
///
/// Covers the full create → read → patch → delete lifecycle plus the
/// rejection paths: validation, content type, malformed bodies and
/// unknown ids.

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use fleetdash::handlers;

mod common;
use common::memory_repo;

fn new_client_body() -> Value {
    json!({
        "name": "Cliente de Prueba",
        "email": "test@cliente.com",
        "phone": "+57 300 123 4567",
        "address": "Dirección de Prueba 123",
        "clientType": "customer",
        "priority": "normal"
    })
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_client_crud_lifecycle() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    // Create
    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(new_client_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("server-assigned id");
    assert_eq!(created["name"], "Cliente de Prueba");
    assert_eq!(created["clientType"], "customer");

    // Read right after create: exactly the posted fields plus the id
    let mut expected = new_client_body();
    expected["id"] = json!(id);
    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, expected);
    assert_eq!(created, expected);

    // List
    let req = test::TestRequest::get().uri("/api/clients").to_request();
    let list: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "test@cliente.com");

    // Patch only name and priority
    let req = test::TestRequest::patch()
        .uri(&format!("/api/clients/{id}"))
        .set_json(json!({"name": "Cliente de Prueba Actualizado", "priority": "high"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Cliente de Prueba Actualizado");
    assert_eq!(updated["priority"], "high");
    assert_eq!(updated["email"], "test@cliente.com", "untouched fields survive");
    assert_eq!(updated["address"], "Dirección de Prueba 123");

    // Read back
    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, updated);

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{id}"))
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_client_ids_are_not_reused() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/clients")
            .set_json(new_client_body())
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["id"].as_i64().expect("id"));
    }
    assert_ne!(ids[0], ids[1]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{}", ids[1]))
        .insert_header(("content-type", "application/json"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(new_client_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert!(!ids.contains(&created["id"].as_i64().expect("id")));
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_create_rejects_invalid_fields() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(json!({"name": "  ", "email": "no-at-sign", "phone": "call me"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_str().expect("details");
    assert!(details.contains("Name is required"));
    assert!(details.contains("Email must be a valid address"));
    assert!(details.contains("Phone may only contain"));

    let req = test::TestRequest::get().uri("/api/clients").to_request();
    let list: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(list.is_empty(), "rejected client must not be stored");
}

#[actix_rt::test]
async fn test_mutations_require_json_content_type() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header(("content-type", "text/plain"))
        .set_payload(new_client_body().to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .expect("error")
            .contains("Content-Type must be application/json")
    );

    // Reads are exempt
    let req = test::TestRequest::get().uri("/api/clients").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_malformed_json_is_a_bad_request() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid JSON body");
    assert!(body["details"].is_string());
}

#[actix_rt::test]
async fn test_unknown_client_ids_are_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let req = test::TestRequest::patch()
        .uri("/api/clients/999")
        .set_json(json!({"name": "Nadie"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri("/api/clients/999")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri("/api/clients/999")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_empty_patch_returns_the_client_unchanged() {
    let app = test::init_service(
        App::new()
            .app_data(memory_repo())
            .configure(handlers::api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(new_client_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/clients/{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let unchanged: Value = test::read_body_json(resp).await;
    assert_eq!(unchanged, created);
}
