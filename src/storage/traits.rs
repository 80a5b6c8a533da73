//! Abstract storage trait for entities.
//!
//! The HTTP layer only talks to `dyn EntityStore`, so a different backend can
//! be dropped in without touching the handlers.

use thiserror::Error;

use crate::entity::{Entity, EntityDraft, EntityId};
use crate::filter::EntityFilter;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity not found.
    #[error("Entity not found: {0}")]
    EntityNotFound(EntityId),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

impl StorageError {
    /// Returns true if this is `EntityNotFound`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityNotFound(_))
    }
}

/// Storage trait for entity operations.
///
/// Every operation is a single atomic step: implementations must not expose
/// a half-applied create, update or delete to concurrent readers.
pub trait EntityStore: Send + Sync {
    /// List entities satisfying every active predicate, in insertion order.
    fn list(&self, filter: &EntityFilter) -> Result<Vec<Entity>, StorageError>;

    /// Get an entity by ID.
    fn get(&self, id: &EntityId) -> Result<Option<Entity>, StorageError>;

    /// Store a new entity under a freshly generated ID and return it.
    fn create(&self, draft: EntityDraft) -> Result<Entity, StorageError>;

    /// Replace every field except `id`. Returns `EntityNotFound` if absent.
    fn update(&self, id: &EntityId, draft: EntityDraft) -> Result<Entity, StorageError>;

    /// Remove an entity. Returns `EntityNotFound` if absent.
    fn delete(&self, id: &EntityId) -> Result<(), StorageError>;

    /// Number of stored entities.
    fn len(&self) -> Result<usize, StorageError>;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
