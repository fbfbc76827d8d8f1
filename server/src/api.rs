//! HTTP Route Handlers
//!
//! The four collection endpoints, JSON in and out. Wire envelopes and field
//! names follow the original client contract (`todoValue`, `newTodo`).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{DomainError, Todo};
use crate::repository::Repository;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/get-all-todos", get(get_all_todos))
        .route("/api/add-todo", post(add_todo))
        .route("/api/complete-todo/:id", put(complete_todo))
        .route("/api/delete-todo/:id", delete(delete_todo))
        .with_state(state)
}

// ========================
// Wire Structs
// ========================

#[derive(Deserialize)]
struct AddTodoRequest {
    #[serde(rename = "todoValue")]
    todo_value: String,
}

#[derive(Serialize)]
struct TodosResponse {
    todos: Vec<Todo>,
    message: String,
}

#[derive(Serialize)]
struct NewTodoResponse {
    #[serde(rename = "newTodo")]
    new_todo: Todo,
    message: String,
}

#[derive(Serialize)]
struct MutatedTodoResponse {
    todo: Todo,
    message: String,
}

/// Domain error carried across the handler boundary
struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, "request failed: {}", self.0);
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}

// ========================
// Handlers
// ========================

async fn get_all_todos(State(state): State<AppState>) -> Result<Json<TodosResponse>, ApiError> {
    let todos = state.repo.list().await?;
    Ok(Json(TodosResponse {
        todos,
        message: "Successfully fetched all todos".to_string(),
    }))
}

async fn add_todo(
    State(state): State<AppState>,
    Json(body): Json<AddTodoRequest>,
) -> Result<Json<NewTodoResponse>, ApiError> {
    if body.todo_value.trim().is_empty() {
        return Err(DomainError::InvalidInput("todo value must not be blank".to_string()).into());
    }

    let new_todo = state.repo.create(&Todo::new(0, body.todo_value)).await?;
    tracing::info!(id = new_todo.id, "todo added");

    Ok(Json(NewTodoResponse {
        new_todo,
        message: "Todo successfully added".to_string(),
    }))
}

async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MutatedTodoResponse>, ApiError> {
    let mut todo = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
    todo.complete();
    let todo = state.repo.update(&todo).await?;
    tracing::info!(id, "todo marked complete");

    Ok(Json(MutatedTodoResponse {
        todo,
        message: "Todo marked complete".to_string(),
    }))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.repo.delete(id).await?;
    tracing::info!(id, "todo deleted");

    Ok(Json(json!({ "message": "Todo successfully deleted" })))
}
