//! Todo Commands
//!
//! One binding per collection endpoint. Wire field names are the server's
//! camelCase.

use serde::{Deserialize, Serialize};
use crate::models::Todo;
use super::fetch_json;

// ========================
// Wire Structs
// ========================

#[derive(Serialize)]
struct AddTodoArgs<'a> {
    #[serde(rename = "todoValue")]
    todo_value: &'a str,
}

#[derive(Deserialize)]
struct TodosEnvelope {
    todos: Vec<Todo>,
}

#[derive(Deserialize)]
struct NewTodoEnvelope {
    #[serde(rename = "newTodo")]
    new_todo: Todo,
}

// ========================
// Commands
// ========================

pub async fn fetch_all_todos() -> Result<Vec<Todo>, String> {
    let result = fetch_json("GET", "/api/get-all-todos", None).await?;
    let envelope: TodosEnvelope =
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(envelope.todos)
}

pub async fn add_todo(value: &str) -> Result<Todo, String> {
    let body = serde_json::to_string(&AddTodoArgs { todo_value: value })
        .map_err(|e| e.to_string())?;
    let result = fetch_json("POST", "/api/add-todo", Some(body)).await?;
    let envelope: NewTodoEnvelope =
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())?;
    Ok(envelope.new_todo)
}

/// Confirmation body is parsed but unused beyond success/failure.
pub async fn complete_todo(id: u32) -> Result<(), String> {
    let _ = fetch_json("PUT", &format!("/api/complete-todo/{}", id), None).await?;
    Ok(())
}

/// Confirmation body is parsed but unused beyond success/failure.
pub async fn delete_todo(id: u32) -> Result<(), String> {
    let _ = fetch_json("DELETE", &format!("/api/delete-todo/{}", id), None).await?;
    Ok(())
}
