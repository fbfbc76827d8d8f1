//! Todo Entity
//!
//! One record of the to-do collection. Ids and timestamps are assigned
//! server-side; deletion is a flag, not a removal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A to-do record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, immutable once created
    pub id: u32,
    /// Free-text label, set at creation
    pub value: String,
    /// Completion status, one-way
    pub is_complete: bool,
    /// Soft-delete flag
    pub is_deleted: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp, None until the first mutation
    pub modified_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Create a new todo with fresh flags and a creation timestamp
    pub fn new(id: u32, value: String) -> Self {
        Self {
            id,
            value,
            is_complete: false,
            is_deleted: false,
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    /// Mark the todo complete
    pub fn complete(&mut self) {
        self.is_complete = true;
        self.touch();
    }

    /// Flag the todo deleted, keeping the record
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}

impl Entity for Todo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(1, "Test todo".to_string());
        assert_eq!(todo.id(), 1);
        assert_eq!(todo.value, "Test todo");
        assert!(!todo.is_complete);
        assert!(!todo.is_deleted);
        assert!(todo.modified_at.is_none());
    }

    #[test]
    fn test_complete_stamps_modified_at() {
        let mut todo = Todo::new(1, "Test todo".to_string());
        todo.complete();
        assert!(todo.is_complete);
        assert!(todo.modified_at.is_some());
    }

    #[test]
    fn test_mark_deleted_keeps_record_fields() {
        let mut todo = Todo::new(2, "Gone".to_string());
        todo.mark_deleted();
        assert!(todo.is_deleted);
        assert_eq!(todo.value, "Gone");
        assert!(todo.modified_at.is_some());
    }
}
