//! In-memory storage backend.
//!
//! Entities live in a single `Vec` guarded by one `RwLock`: list and get take
//! the read side, create/update/delete take the write side. Insertion order is
//! the list order.

use std::sync::RwLock;

use tracing::{debug, info};

use crate::entity::{Entity, EntityDraft, EntityId};
use crate::filter::EntityFilter;
use crate::storage::traits::{EntityStore, StorageError};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

/// Thread-safe in-memory entity store.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    entities: RwLock<Vec<Entity>>,
}

impl InMemoryEntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given records in order.
    ///
    /// Records are taken as-is, including their ids; callers are responsible
    /// for keeping ids unique.
    #[must_use]
    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

impl EntityStore for InMemoryEntityStore {
    fn list(&self, filter: &EntityFilter) -> Result<Vec<Entity>, StorageError> {
        let entities = self.entities.read().map_err(|_| lock_err("entity.list"))?;
        let matched: Vec<Entity> = entities
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        debug!(
            total = entities.len(),
            matched = matched.len(),
            "listed entities"
        );
        Ok(matched)
    }

    fn get(&self, id: &EntityId) -> Result<Option<Entity>, StorageError> {
        let entities = self.entities.read().map_err(|_| lock_err("entity.get"))?;
        Ok(entities.iter().find(|e| &e.id == id).cloned())
    }

    fn create(&self, draft: EntityDraft) -> Result<Entity, StorageError> {
        let mut entities = self.entities.write().map_err(|_| lock_err("entity.create"))?;

        let mut id = EntityId::generate();
        while entities.iter().any(|e| e.id == id) {
            id = EntityId::generate();
        }

        let entity = Entity::from_draft(id, draft);
        entities.push(entity.clone());
        info!(id = %entity.id, "created entity");
        Ok(entity)
    }

    fn update(&self, id: &EntityId, draft: EntityDraft) -> Result<Entity, StorageError> {
        let mut entities = self.entities.write().map_err(|_| lock_err("entity.update"))?;
        let existing = entities
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| StorageError::EntityNotFound(id.clone()))?;

        existing.apply(draft);
        info!(id = %id, "updated entity");
        Ok(existing.clone())
    }

    fn delete(&self, id: &EntityId) -> Result<(), StorageError> {
        let mut entities = self.entities.write().map_err(|_| lock_err("entity.delete"))?;
        let position = entities
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| StorageError::EntityNotFound(id.clone()))?;

        entities.remove(position);
        info!(id = %id, "deleted entity");
        Ok(())
    }

    fn len(&self) -> Result<usize, StorageError> {
        let entities = self.entities.read().map_err(|_| lock_err("entity.len"))?;
        Ok(entities.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;

    use crate::entity::Name;

    #[test]
    fn entity_create_get_update_delete() {
        let store = InMemoryEntityStore::new();
        assert!(store.is_empty().unwrap());

        let created = store
            .create(EntityDraft::new().with_name(Name::new("Ada", None::<String>, "Lovelace")))
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(store.len().unwrap(), 1);

        let got = store.get(&created.id).unwrap().unwrap();
        assert_eq!(got, created);

        let updated = store
            .update(&created.id, EntityDraft::new().with_gender("Female"))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.gender.as_deref(), Some("Female"));
        assert!(updated.names.is_none());
        assert_eq!(store.get(&created.id).unwrap().unwrap(), updated);

        store.delete(&created.id).unwrap();
        assert!(store.get(&created.id).unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn missing_ids_report_not_found() {
        let store = InMemoryEntityStore::new();
        let id = EntityId::from("nope");

        assert!(store.get(&id).unwrap().is_none());
        assert!(matches!(
            store.update(&id, EntityDraft::new()),
            Err(StorageError::EntityNotFound(missing)) if missing == id
        ));
        assert!(store.delete(&id).unwrap_err().is_not_found());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let seeded = vec![
            Entity::from_draft(EntityId::from("b"), EntityDraft::new()),
            Entity::from_draft(EntityId::from("a"), EntityDraft::new()),
        ];
        let store = InMemoryEntityStore::with_entities(seeded);
        let created = store.create(EntityDraft::new()).unwrap();

        let ids: Vec<String> = store
            .list(&EntityFilter::new())
            .unwrap()
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string(), created.id.to_string()]);
    }

    #[test]
    fn concurrent_creates_are_all_kept() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..25 {
                        store.create(EntityDraft::new()).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 200);
    }
}
