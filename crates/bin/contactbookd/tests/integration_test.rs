//! End-to-end smoke tests for the full contactbookd stack.
//!
//! Each test spins up the complete application (a JSON file in a temporary
//! directory, the real repository, service and axum router) and exercises the
//! HTTP layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use contactbook_adapter_http_axum::router;
use contactbook_adapter_http_axum::state::AppState;
use contactbook_adapter_storage_json::{Config, JsonContactRepository};
use contactbook_app::services::contact_service::ContactService;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a fully-wired router backed by a contacts file in a fresh directory.
async fn app_with(seed_demo: bool) -> (TempDir, PathBuf, axum::Router) {
    let dir = tempfile::tempdir().expect("temporary directory should be created");
    let path = dir.path().join("database.json");

    let file = Config {
        path: path.clone(),
        seed_demo,
    }
    .build()
    .await
    .expect("contacts file should initialise");

    let state = AppState::new(ContactService::new(JsonContactRepository::new(file)));
    (dir, path, router::build(state))
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn read_file(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (_dir, _path, app) = app_with(false).await;
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_start_with_empty_list_when_file_missing() {
    let (_dir, path, app) = app_with(false).await;

    let (status, body) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    assert!(!path.exists());
}

#[tokio::test]
async fn should_complete_contact_crud_cycle() {
    let (_dir, path, app) = app_with(false).await;

    // Create
    let (status, body) = send(
        &app,
        "POST",
        "/contacts",
        Some(r#"{"name":"Olga Novikova","email":"olga.n@example.com","phone":"+7 (999) 678-90-12","status":"active"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    // Persisted to disk
    let on_disk = read_file(&path);
    assert_eq!(on_disk["contacts"][0]["name"], "Olga Novikova");

    // Get
    let (status, body) = send(&app, "GET", "/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "olga.n@example.com");

    // Update
    let (status, body) = send(
        &app,
        "PUT",
        "/contacts/1",
        Some(r#"{"id": 42, "status": "inactive"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "inactive");
    assert_eq!(body["name"], "Olga Novikova");
    assert_eq!(read_file(&path)["contacts"][0]["status"], "inactive");

    // Delete
    let (status, body) = send(&app, "DELETE", "/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "contact deleted");

    // Verify gone
    let (status, _) = send(&app, "GET", "/contacts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(read_file(&path)["contacts"], serde_json::json!([]));
}

#[tokio::test]
async fn should_reject_contact_missing_required_field() {
    let (_dir, path, app) = app_with(false).await;

    for body in [
        r#"{"email":"a@example.com","phone":"1","status":"active"}"#,
        r#"{"name":"A","phone":"1","status":"active"}"#,
        r#"{"name":"A","email":"a@example.com","status":"active"}"#,
        r#"{"name":"A","email":"a@example.com","phone":"1"}"#,
        r#"{"name":"","email":"a@example.com","phone":"1","status":"active"}"#,
    ] {
        let (status, json) = send(&app, "POST", "/contacts", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(json["error"].is_string());
    }

    assert!(!path.exists());
}

#[tokio::test]
async fn should_reject_duplicate_explicit_id() {
    let (_dir, _path, app) = app_with(true).await;

    let (status, body) = send(
        &app,
        "POST",
        "/contacts",
        Some(r#"{"id":3,"name":"A","email":"a@example.com","phone":"1","status":"active"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn should_assign_max_plus_one_on_seeded_store() {
    let (_dir, _path, app) = app_with(true).await;

    let (status, body) = send(
        &app,
        "POST",
        "/contacts",
        Some(r#"{"name":"Olga","email":"olga.n@example.com","phone":"1","status":"inactive"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 6);
}

#[tokio::test]
async fn should_assign_id_when_requested_id_is_zero() {
    let (_dir, _path, app) = app_with(false).await;

    let (status, body) = send(
        &app,
        "POST",
        "/contacts",
        Some(r#"{"id":0,"name":"Olga","email":"olga.n@example.com","phone":"1","status":"active"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn should_reject_create_when_ids_are_exhausted() {
    let (_dir, path, app) = app_with(false).await;
    std::fs::write(
        &path,
        format!(
            r#"{{"contacts":[{{"id":{},"name":"Ivan","email":"i@example.com","phone":"1","status":"active"}}]}}"#,
            u64::MAX
        ),
    )
    .unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let (status, body) = send(
        &app,
        "POST",
        "/contacts",
        Some(r#"{"name":"Olga","email":"olga.n@example.com","phone":"1","status":"active"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("no contact id left"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn should_leave_file_untouched_when_update_status_is_invalid() {
    let (_dir, path, app) = app_with(true).await;
    let before = std::fs::read_to_string(&path).unwrap();

    let (status, body) = send(&app, "PUT", "/contacts/1", Some(r#"{"status":"archived"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("archived"));

    let (status, _) = send(&app, "PUT", "/contacts/1", Some(r#"{"status":""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn should_return_not_found_before_validating_update_of_missing_contact() {
    let (_dir, _path, app) = app_with(true).await;

    let (status, _) = send(&app, "PUT", "/contacts/99", Some(r#"{"email":""}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/contacts/99", Some(r#"{"status":"archived"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_exactly_the_active_contacts() {
    let (_dir, _path, app) = app_with(true).await;

    let (status, body) = send(&app, "GET", "/contacts/active", None).await;
    assert_eq!(status, StatusCode::OK);

    let active = body.as_array().unwrap();
    assert_eq!(active.len(), 3);
    assert!(active.iter().all(|c| c["status"] == "active"));

    let (_, all) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_contact() {
    let (_dir, _path, app) = app_with(true).await;

    let (status, body) = send(&app, "DELETE", "/contacts/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Contact 99 not found");

    let (_, all) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn should_see_external_edits_to_the_file() {
    let (_dir, path, app) = app_with(false).await;

    std::fs::write(
        &path,
        r#"{"contacts":[{"id":7,"name":"Dmitry Kozlov","email":"d.kozlov@example.com","phone":"+7 (999) 567-89-01","status":"inactive"}]}"#,
    )
    .unwrap();

    let (status, body) = send(&app, "GET", "/contacts/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dmitry Kozlov");
}

#[tokio::test]
async fn should_return_internal_error_when_file_is_corrupt() {
    let (_dir, path, app) = app_with(false).await;
    std::fs::write(&path, "not json at all").unwrap();

    let (status, body) = send(&app, "GET", "/contacts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn should_return_internal_error_when_file_repeats_an_id() {
    let (_dir, path, app) = app_with(false).await;
    std::fs::write(
        &path,
        r#"{"contacts":[
            {"id":1,"name":"Ivan","email":"i@example.com","phone":"1","status":"active"},
            {"id":1,"name":"Olga","email":"o@example.com","phone":"2","status":"active"}
        ]}"#,
    )
    .unwrap();

    let (status, _) = send(&app, "GET", "/contacts/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
