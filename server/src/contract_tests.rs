//! API Contract Tests
//!
//! Drive the full router in-process and assert on status plus JSON body.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{api, AppState};

fn test_app() -> Router {
    api::router(AppState::new())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    read_response(app, request).await
}

async fn send_json(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");
    read_response(app, request).await
}

async fn read_response(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_get_all_todos_starts_empty() {
    let app = test_app();

    let (status, body) = get_json(app, "/api/get-all-todos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todos"], json!([]));
}

#[tokio::test]
async fn test_add_todo_returns_new_entity() {
    let app = test_app();

    let (status, body) = send_json(
        app.clone(),
        "POST",
        "/api/add-todo",
        Some(json!({ "todoValue": "buy milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newTodo"]["value"], "buy milk");
    assert_eq!(body["newTodo"]["id"], 1);
    assert_eq!(body["newTodo"]["is_complete"], false);
    assert_eq!(body["newTodo"]["is_deleted"], false);

    let (status, body) = get_json(app, "/api/get-all-todos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todos"].as_array().expect("array").len(), 1);
    assert_eq!(body["todos"][0]["value"], "buy milk");
}

#[tokio::test]
async fn test_add_todo_rejects_blank_value() {
    let app = test_app();

    let (status, _) = send_json(
        app.clone(),
        "POST",
        "/api/add-todo",
        Some(json!({ "todoValue": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // No row created
    let (_, body) = get_json(app, "/api/get-all-todos").await;
    assert_eq!(body["todos"], json!([]));
}

#[tokio::test]
async fn test_complete_todo_flips_only_matching_entity() {
    let app = test_app();

    send_json(app.clone(), "POST", "/api/add-todo", Some(json!({ "todoValue": "a" }))).await;
    send_json(app.clone(), "POST", "/api/add-todo", Some(json!({ "todoValue": "b" }))).await;

    let (status, body) = send_json(app.clone(), "PUT", "/api/complete-todo/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["todo"]["is_complete"], true);

    let (_, body) = get_json(app, "/api/get-all-todos").await;
    assert_eq!(body["todos"][0]["is_complete"], true);
    assert_eq!(body["todos"][1]["is_complete"], false);
    assert!(body["todos"][0]["modified_at"].is_string());
}

#[tokio::test]
async fn test_complete_unknown_todo_is_not_found() {
    let app = test_app();

    let (status, _) = send_json(app, "PUT", "/api/complete-todo/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_todo_soft_deletes() {
    let app = test_app();

    send_json(app.clone(), "POST", "/api/add-todo", Some(json!({ "todoValue": "a" }))).await;

    let (status, _) = send_json(app.clone(), "DELETE", "/api/delete-todo/1", None).await;
    assert_eq!(status, StatusCode::OK);

    // The list still returns the row, flagged
    let (_, body) = get_json(app, "/api/get-all-todos").await;
    assert_eq!(body["todos"].as_array().expect("array").len(), 1);
    assert_eq!(body["todos"][0]["is_deleted"], true);
}

#[tokio::test]
async fn test_delete_unknown_todo_is_not_found() {
    let app = test_app();

    let (status, _) = send_json(app, "DELETE", "/api/delete-todo/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
