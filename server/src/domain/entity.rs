//! Domain Layer - Entity Contract
//!
//! Shared contract for id-bearing records plus the error taxonomy the
//! repository and api layers speak.

use serde::Serialize;

/// Contract for records stored in a collection
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors, mapped onto HTTP statuses at the api boundary
#[derive(Debug, Clone, Serialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            DomainError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
