//! Scenario tests for the cache tier, driven through the public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tiered_cache::{BackingStore, BoundedCache, CacheError, Entity, MemoryStore, Result};

type Cache = BoundedCache<&'static str, MemoryStore<&'static str>>;

fn cache(max_size: usize) -> Cache {
    BoundedCache::new(max_size, MemoryStore::new()).unwrap()
}

fn resident(cache: &Cache) -> Vec<&str> {
    let mut ids: Vec<&str> = cache.ids().collect();
    ids.sort_unstable();
    ids
}

/// Wraps a MemoryStore; every call fails while `down` is set.
struct SwitchableStore {
    inner: MemoryStore<&'static str>,
    down: Arc<AtomicBool>,
}

impl SwitchableStore {
    fn new() -> (Self, Arc<AtomicBool>) {
        let down = Arc::new(AtomicBool::new(false));
        let store = Self {
            inner: MemoryStore::new(),
            down: Arc::clone(&down),
        };
        (store, down)
    }

    fn check(&self) -> Result<()> {
        if self.down.load(Ordering::SeqCst) {
            return Err(CacheError::Storage("medium unavailable".to_string()));
        }
        Ok(())
    }
}

impl BackingStore<&'static str> for SwitchableStore {
    fn save(&mut self, entity: Entity<&'static str>) -> Result<()> {
        self.check()?;
        self.inner.save(entity)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.check()?;
        self.inner.remove(id)
    }

    fn clear(&mut self) -> Result<()> {
        self.check()?;
        self.inner.clear()
    }

    fn get(&self, id: &str) -> Result<Option<Entity<&'static str>>> {
        self.check()?;
        self.inner.get(id)
    }
}

// == Construction ==

#[test]
fn test_zero_capacity_is_a_configuration_error() {
    let result = Cache::new(0, MemoryStore::new());
    assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
}

// == Eviction ==

#[test]
fn test_third_add_evicts_first_into_store() {
    let mut cache = cache(2);

    cache.add(Entity::new("1", "Data 1")).unwrap();
    cache.add(Entity::new("2", "Data 2")).unwrap();
    cache.add(Entity::new("3", "Data 3")).unwrap();

    let stored = cache.store().get("1").unwrap().unwrap();
    assert_eq!(*stored.data(), "Data 1");
    assert_eq!(resident(&cache), ["2", "3"]);
}

#[test]
fn test_readd_refreshes_recency_but_not_payload() {
    let mut cache = cache(2);

    cache.add(Entity::new("1", "A")).unwrap();
    cache.add(Entity::new("2", "X")).unwrap();
    cache.add(Entity::new("1", "B")).unwrap();
    cache.add(Entity::new("3", "Y")).unwrap();

    assert_eq!(resident(&cache), ["1", "3"]);
    assert!(cache.store().contains("2"));
    assert_eq!(*cache.get("1").unwrap().data(), "A");
}

#[test]
fn test_capacity_one_promotes_and_swaps() {
    let mut cache = cache(1);

    cache.add(Entity::new("1", "one")).unwrap();
    cache.add(Entity::new("2", "two")).unwrap();

    let promoted = cache.get("1").unwrap();
    assert_eq!(*promoted.data(), "one");
    assert_eq!(resident(&cache), ["1"]);
    assert_eq!(*cache.store().get("2").unwrap().unwrap().data(), "two");
}

#[test]
fn test_promoted_copy_is_the_stored_one() {
    let mut cache = cache(1);

    cache.add(Entity::new("1", "stored")).unwrap();
    cache.add(Entity::new("2", "other")).unwrap();
    cache.clear();

    let entity = cache.get("1").unwrap();
    assert_eq!(*entity.data(), "stored");
    assert!(cache.contains("1"));
}

// == Removal ==

#[test]
fn test_remove_of_store_only_entity() {
    let mut cache = cache(1);

    cache.add(Entity::new("1", "a")).unwrap();
    cache.add(Entity::new("2", "b")).unwrap();
    assert!(!cache.contains("1"));

    cache.remove("1").unwrap();

    assert!(cache.store().get("1").unwrap().is_none());
    assert!(cache.get("1").is_none());
}

#[test]
fn test_remove_of_unknown_id_is_noop() {
    let mut cache = cache(2);
    cache.add(Entity::new("1", "a")).unwrap();

    cache.remove("99").unwrap();

    assert_eq!(resident(&cache), ["1"]);
    assert!(cache.store().is_empty());
}

// == clear vs remove_all ==

#[test]
fn test_clear_leaves_store_untouched() {
    let mut cache = cache(2);
    cache.add(Entity::new("1", "a")).unwrap();
    cache.add(Entity::new("2", "b")).unwrap();
    cache.add(Entity::new("3", "c")).unwrap();

    cache.clear();
    cache.clear();

    assert!(cache.is_empty());
    assert!(cache.store().get("1").unwrap().is_some());
}

#[test]
fn test_remove_all_empties_both_tiers() {
    let mut cache = cache(2);
    cache.add(Entity::new("1", "a")).unwrap();
    cache.add(Entity::new("2", "b")).unwrap();
    cache.add(Entity::new("3", "c")).unwrap();

    cache.remove_all().unwrap();
    cache.remove_all().unwrap();

    assert!(cache.is_empty());
    assert!(cache.store().get("1").unwrap().is_none());
    assert!(cache.store().is_empty());
}

// == Storage faults ==

#[test]
fn test_eviction_fault_propagates_and_keeps_capacity() {
    let (store, down) = SwitchableStore::new();
    let mut cache = BoundedCache::new(2, store).unwrap();

    cache.add(Entity::new("1", "a")).unwrap();
    cache.add(Entity::new("2", "b")).unwrap();

    down.store(true, Ordering::SeqCst);
    let result = cache.add(Entity::new("3", "c"));
    assert!(matches!(result, Err(CacheError::Storage(_))));
    assert_eq!(cache.len(), 2);
    assert!(!cache.contains("3"));

    // once the store is back the same add goes through
    down.store(false, Ordering::SeqCst);
    cache.add(Entity::new("3", "c")).unwrap();
    assert!(cache.contains("3"));
    assert!(!cache.contains("1"));
}

#[test]
fn test_refresh_never_touches_the_store() {
    let (store, down) = SwitchableStore::new();
    let mut cache = BoundedCache::new(1, store).unwrap();
    cache.add(Entity::new("1", "a")).unwrap();

    down.store(true, Ordering::SeqCst);

    assert!(cache.add(Entity::new("1", "a")).is_ok());
    assert!(cache.get("1").is_some());
}

#[test]
fn test_read_faults_become_misses() {
    let (store, down) = SwitchableStore::new();
    let mut cache = BoundedCache::new(1, store).unwrap();
    cache.add(Entity::new("1", "a")).unwrap();
    cache.add(Entity::new("2", "b")).unwrap();

    down.store(true, Ordering::SeqCst);

    assert!(cache.get("1").is_none());
    assert!(matches!(cache.try_get("1"), Err(CacheError::Storage(_))));
    // resident entities are still served
    assert!(cache.get("2").is_some());
}

#[test]
fn test_write_faults_propagate_from_remove_and_remove_all() {
    let (store, down) = SwitchableStore::new();
    let mut cache = BoundedCache::new(2, store).unwrap();
    cache.add(Entity::new("1", "a")).unwrap();

    down.store(true, Ordering::SeqCst);

    assert!(matches!(cache.remove("1"), Err(CacheError::Storage(_))));
    assert!(matches!(cache.remove_all(), Err(CacheError::Storage(_))));
}
