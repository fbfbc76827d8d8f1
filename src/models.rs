//! Frontend Models
//!
//! Data structures matching server API payloads.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches server)
///
/// Timestamps are server-assigned and carried as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub value: String,
    pub is_complete: bool,
    pub is_deleted: bool,
    pub created_at: String,
    pub modified_at: Option<String>,
}

impl Todo {
    /// Shown in the "To-do" section
    pub fn is_active(&self) -> bool {
        !self.is_complete && !self.is_deleted
    }

    /// Shown in the "Completed" section
    pub fn is_completed(&self) -> bool {
        self.is_complete && !self.is_deleted
    }
}
