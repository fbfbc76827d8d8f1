//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! helpers apply the optimistic reconciliation for each confirmed server
//! call; the list transforms underneath them are plain functions so the
//! synchronization rules stay unit-testable.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local copy of the server collection, insertion order preserved
    pub todos: Vec<Todo>,
    /// Pending input text for the new-todo form
    pub staged_value: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list with the server response (initial load)
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Append a server-created todo to the store
pub fn store_append_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Mark a todo complete in the store by ID
pub fn store_mark_complete(store: &AppStore, id: u32) {
    let current = store.todos().get();
    *store.todos().write() = mark_complete(&current, id);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, id: u32) {
    store.todos().write().retain(|todo| todo.id != id);
}

// ========================
// List Transforms
// ========================

/// Rebuild the list, setting `is_complete` only for the matching ID.
///
/// Every entry is rewritten into a new entity; non-matching entries pass
/// through unchanged.
pub fn mark_complete(todos: &[Todo], id: u32) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| Todo {
            is_complete: todo.id == id || todo.is_complete,
            ..todo.clone()
        })
        .collect()
}

/// Entries for the "To-do" section
pub fn active_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.is_active()).cloned().collect()
}

/// Entries for the "Completed" section
pub fn completed_todos(todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.is_completed()).cloned().collect()
}
