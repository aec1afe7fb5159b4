//! Bounded Cache Module
//!
//! Main cache engine: a HashMap working set with LRU tracking, spilling
//! evicted entities into a backing store and promoting them back on read.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::backing::BackingStore;
use crate::cache::{CacheStats, Entity, LruTracker};
use crate::error::{CacheError, Result};
use crate::observe::{CacheEvent, Observer, TracingObserver};

// == Bounded Cache ==
/// Size-limited LRU cache layered in front of a [`BackingStore`].
///
/// `entries` and `lru` always hold the same key set; every method that
/// touches one touches the other before returning.
pub struct BoundedCache<T, S> {
    /// Resident entities
    entries: HashMap<String, Entity<T>>,
    /// Recency index over the resident ids
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of resident entities
    max_size: usize,
    /// Durable tier receiving evictions
    store: S,
    observer: Arc<dyn Observer>,
}

impl<T, S> BoundedCache<T, S>
where
    T: Clone,
    S: BackingStore<T>,
{
    // == Constructor ==
    /// Creates a cache holding at most `max_size` entities, reporting through `tracing`.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if `max_size` is zero.
    pub fn new(max_size: usize, store: S) -> Result<Self> {
        Self::with_observer(max_size, store, Arc::new(TracingObserver))
    }

    /// Creates a cache that reports its events to `observer`.
    pub fn with_observer(max_size: usize, store: S, observer: Arc<dyn Observer>) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_size,
            store,
            observer,
        })
    }

    // == Add ==
    /// Adds an entity to the cache, evicting the least recently used entry
    /// to the store if the cache is full.
    ///
    /// Re-adding an id that is already resident only refreshes its recency;
    /// the cached payload is kept as is.
    ///
    /// # Errors
    /// `CacheError::Storage` if the eviction could not be saved. The cache is
    /// left untouched in that case and `entity` is not inserted.
    pub fn add(&mut self, entity: Entity<T>) -> Result<()> {
        if self.entries.contains_key(entity.id()) {
            debug_assert!(self.lru.contains(entity.id()));
            self.lru.touch(entity.id());
            self.observer
                .record(&CacheEvent::Refreshed { id: entity.id() });
            return Ok(());
        }

        self.insert(entity)
            .inspect_err(|error| self.fault("add", error))
    }

    // == Get ==
    /// Returns an entity from memory or, failing that, from the store.
    ///
    /// A store hit is promoted back into the cache (possibly evicting another
    /// entry). Faults are logged and reported as a miss; use [`try_get`] to
    /// see them.
    ///
    /// [`try_get`]: BoundedCache::try_get
    pub fn get(&mut self, id: &str) -> Option<Entity<T>> {
        match self.try_get(id) {
            Ok(found) => found,
            Err(error) => {
                self.fault("get", &error);
                None
            }
        }
    }

    /// Like [`get`](BoundedCache::get) but surfaces store faults.
    pub fn try_get(&mut self, id: &str) -> Result<Option<Entity<T>>> {
        if let Some(entity) = self.entries.get(id) {
            let entity = entity.clone();
            self.lru.touch(id);
            self.stats.record_hit();
            self.observer.record(&CacheEvent::Hit { id });
            return Ok(Some(entity));
        }

        self.stats.record_miss();

        let Some(entity) = self.store.get(id)? else {
            self.observer.record(&CacheEvent::Miss { id });
            return Ok(None);
        };

        self.insert(entity.clone())?;
        self.stats.record_promotion();
        self.observer.record(&CacheEvent::Promoted { id });
        Ok(Some(entity))
    }

    // == Remove ==
    /// Removes an entity from both the cache and the store.
    ///
    /// Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.entries.remove(id);
        self.lru.remove(id);
        self.stats.set_total_entries(self.entries.len());

        self.store
            .remove(id)
            .inspect_err(|error| self.fault("remove", error))?;
        self.observer.record(&CacheEvent::Removed { id });
        Ok(())
    }

    // == Remove All ==
    /// Empties the cache and the store.
    pub fn remove_all(&mut self) -> Result<()> {
        self.drop_resident();

        self.store
            .clear()
            .inspect_err(|error| self.fault("remove_all", error))?;
        self.observer.record(&CacheEvent::RemovedAll);
        Ok(())
    }

    // == Clear ==
    /// Empties the cache only; the store keeps everything it holds.
    pub fn clear(&mut self) {
        let dropped = self.drop_resident();
        self.observer.record(&CacheEvent::Cleared { dropped });
    }

    // == Length ==
    /// Returns the current number of resident entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Checks residency without touching recency.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Recency tick of a resident id; larger means more recently used.
    pub fn last_access(&self, id: &str) -> Option<u64> {
        self.lru.last_access(id)
    }

    /// The id that the next eviction would pick.
    pub fn peek_lru(&self) -> Option<&str> {
        self.lru.peek_oldest()
    }

    /// Resident ids, least recently used first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.lru.iter_oldest_first()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// The backing store underneath this cache.
    pub fn store(&self) -> &S {
        &self.store
    }

    // == Internals ==
    /// Inserts a non-resident entity, evicting once if at capacity.
    fn insert(&mut self, entity: Entity<T>) -> Result<()> {
        if self.entries.len() >= self.max_size {
            self.evict()?;
        }

        let id = entity.id().to_string();
        self.lru.touch(&id);
        self.entries.insert(id.clone(), entity);
        self.stats.set_total_entries(self.entries.len());

        debug_assert_eq!(self.entries.len(), self.lru.len());
        self.observer.record(&CacheEvent::Inserted {
            id: &id,
            len: self.entries.len(),
        });
        Ok(())
    }

    /// Moves the least recently used entity to the store.
    ///
    /// The victim is saved before it leaves memory, so a failed save leaves
    /// the cache exactly as it was.
    fn evict(&mut self) -> Result<()> {
        let Some(oldest) = self.lru.peek_oldest() else {
            return Ok(());
        };
        let Some(victim) = self.entries.get(oldest).cloned() else {
            return Err(CacheError::Internal(format!(
                "recency index holds '{oldest}' but no entry does"
            )));
        };

        self.store.save(victim)?;

        if let Some(id) = self.lru.evict_oldest() {
            self.entries.remove(&id);
            self.stats.record_eviction();
            self.observer.record(&CacheEvent::Evicted { id: &id });
        }
        Ok(())
    }

    fn drop_resident(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        debug_assert!(self.lru.is_empty());
        self.stats.set_total_entries(0);
        dropped
    }

    fn fault(&self, operation: &'static str, error: &CacheError) {
        self.observer
            .record(&CacheEvent::Fault { operation, error });
    }
}

impl<T, S: fmt::Debug> fmt::Debug for BoundedCache<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("len", &self.entries.len())
            .field("max_size", &self.max_size)
            .field("lru", &self.lru)
            .field("stats", &self.stats)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
