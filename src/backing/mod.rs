//! Backing Store Module
//!
//! The durable tier underneath the cache. The cache only ever talks to it
//! through [`BackingStore`].

mod memory;

pub use memory::MemoryStore;

use crate::cache::Entity;
use crate::error::Result;

// == Backing Store Trait ==
/// A key-value store of entities, keyed by entity id.
///
/// Implementations report medium failures as [`CacheError::Storage`].
/// A lookup miss is `Ok(None)`, and removing an unknown id is `Ok(())`.
///
/// [`CacheError::Storage`]: crate::error::CacheError::Storage
pub trait BackingStore<T> {
    /// Inserts or overwrites the entity under its id.
    fn save(&mut self, entity: Entity<T>) -> Result<()>;

    /// Deletes the entity with this id, if present.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Deletes every entity.
    fn clear(&mut self) -> Result<()>;

    /// Looks up an entity by id.
    fn get(&self, id: &str) -> Result<Option<Entity<T>>>;
}
