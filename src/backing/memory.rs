//! In-memory Backing Store
//!
//! HashMap-backed store used by the server and in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::backing::BackingStore;
use crate::cache::Entity;
use crate::error::Result;
use crate::observe::{CacheEvent, Observer, TracingObserver};

// == Memory Store ==
/// Unbounded id -> entity map. `save` is an upsert.
pub struct MemoryStore<T> {
    entities: HashMap<String, Entity<T>>,
    observer: Arc<dyn Observer>,
}

impl<T> MemoryStore<T> {
    // == Constructor ==
    /// Creates an empty store that reports through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn Observer>) -> Self {
        Self {
            entities: HashMap::new(),
            observer,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("len", &self.entities.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone> BackingStore<T> for MemoryStore<T> {
    fn save(&mut self, entity: Entity<T>) -> Result<()> {
        let id = entity.id().to_string();
        self.entities.insert(id.clone(), entity);
        self.observer.record(&CacheEvent::StoreSaved { id: &id });
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let existed = self.entities.remove(id).is_some();
        self.observer
            .record(&CacheEvent::StoreRemoved { id, existed });
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let dropped = self.entities.len();
        self.entities.clear();
        self.observer.record(&CacheEvent::StoreCleared { dropped });
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Entity<T>>> {
        let found = self.entities.get(id).cloned();
        self.observer.record(&CacheEvent::StoreLookup {
            id,
            found: found.is_some(),
        });
        Ok(found)
    }
}
