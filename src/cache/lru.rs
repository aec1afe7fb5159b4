//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with the next value of a monotonic clock, so
/// no two keys ever share a recency tick. Two indexes are kept in step:
/// - `ticks`: key -> last access tick
/// - `order`: tick -> key, ascending, so the first entry is least recently used
///
/// Touch, remove and eviction are all O(log n).
#[derive(Debug, Default)]
pub struct LruTracker {
    ticks: HashMap<String, u64>,
    order: BTreeMap<u64, String>,
    clock: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used and returns its new tick.
    ///
    /// If key exists, its previous tick is dropped from the order index.
    pub fn touch(&mut self, key: &str) -> u64 {
        self.clock += 1;
        let tick = self.clock;

        match self.ticks.get_mut(key) {
            Some(previous) => {
                self.order.remove(&*previous);
                *previous = tick;
            }
            None => {
                self.ticks.insert(key.to_string(), tick);
            }
        }
        self.order.insert(tick, key.to_string());

        tick
    }

    // == Remove ==
    /// Removes a key from the tracker, returning its last tick if it was tracked.
    pub fn remove(&mut self, key: &str) -> Option<u64> {
        let tick = self.ticks.remove(key)?;
        self.order.remove(&tick);
        Some(tick)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.first_key_value().map(|(_, key)| key.as_str())
    }

    /// Returns the last access tick of a key.
    pub fn last_access(&self, key: &str) -> Option<u64> {
        self.ticks.get(key).copied()
    }

    /// Iterates keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> {
        self.order.values().map(String::as_str)
    }

    // == Clear ==
    /// Forgets every key. The clock keeps running so ticks stay monotonic.
    pub fn clear(&mut self) {
        self.ticks.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    // == Contains ==
    pub fn contains(&self, key: &str) -> bool {
        self.ticks.contains_key(key)
    }
}
