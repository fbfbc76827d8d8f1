//! Todo Repository
//!
//! In-memory implementation of the collection. Rows live in an ordered Vec
//! behind a tokio Mutex; `delete` flags rows as deleted rather than
//! removing them, so `list` can return pre-flagged entities.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Todo};
use super::traits::Repository;

struct TodoRows {
    todos: Vec<Todo>,
    next_id: u32,
}

/// In-memory todo repository
#[derive(Clone)]
pub struct TodoRepository {
    rows: Arc<Mutex<TodoRows>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(TodoRows {
                todos: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let mut rows = self.rows.lock().await;

        let mut todo = entity.clone();
        todo.id = rows.next_id;
        rows.next_id += 1;
        rows.todos.push(todo.clone());

        Ok(todo)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Todo>> {
        let rows = self.rows.lock().await;
        Ok(rows.todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let rows = self.rows.lock().await;
        // Insertion order, soft-deleted rows included
        Ok(rows.todos.clone())
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let mut rows = self.rows.lock().await;

        let row = rows
            .todos
            .iter_mut()
            .find(|todo| todo.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", entity.id)))?;
        *row = entity.clone();

        Ok(row.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut rows = self.rows.lock().await;

        let row = rows
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("todo {}", id)))?;
        row.mark_deleted();

        Ok(())
    }
}
