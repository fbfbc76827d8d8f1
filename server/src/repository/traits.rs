//! Repository Layer - Core Traits
//!
//! Abstract interface for collection access, generic over any Entity type.
//! All operations are async to support various backends.

use async_trait::async_trait;
use crate::domain::{DomainResult, Entity};

/// Core repository trait for collection operations
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a new entity, assigning its id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in insertion order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
