//! Observability Module
//!
//! An observer is handed to the cache and to the backing store at
//! construction time instead of reaching for a process-wide logger. The
//! default [`TracingObserver`] turns events into `tracing` records; tests
//! can plug in their own recorder.

use tracing::{debug, info, warn};

use crate::error::CacheError;

// == Cache Event ==
/// Something that happened inside the cache or its backing store.
#[derive(Debug)]
pub enum CacheEvent<'a> {
    /// A new entity entered the cache
    Inserted { id: &'a str, len: usize },
    /// A resident entity was re-added; only its recency changed
    Refreshed { id: &'a str },
    /// Read served from memory
    Hit { id: &'a str },
    /// Read not found in either tier
    Miss { id: &'a str },
    /// Read found in the store and pulled back into memory
    Promoted { id: &'a str },
    /// Least recently used entity moved to the store
    Evicted { id: &'a str },
    /// Entity removed from both tiers
    Removed { id: &'a str },
    /// Both tiers emptied
    RemovedAll,
    /// Memory tier emptied
    Cleared { dropped: usize },
    /// An operation failed
    Fault {
        operation: &'static str,
        error: &'a CacheError,
    },
    StoreSaved { id: &'a str },
    StoreRemoved { id: &'a str, existed: bool },
    StoreCleared { dropped: usize },
    StoreLookup { id: &'a str, found: bool },
}

// == Observer Trait ==
/// Receives cache and store events.
pub trait Observer: Send + Sync {
    fn record(&self, event: &CacheEvent<'_>);
}

// == Tracing Observer ==
/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn record(&self, event: &CacheEvent<'_>) {
        match event {
            CacheEvent::Inserted { id, len } => debug!(id, len, "Entity added to cache"),
            CacheEvent::Refreshed { id } => debug!(id, "Refreshed access time for cached entity"),
            CacheEvent::Hit { id } => debug!(id, "Cache hit"),
            CacheEvent::Miss { id } => debug!(id, "Cache miss"),
            CacheEvent::Promoted { id } => info!(id, "Promoted entity from store into cache"),
            CacheEvent::Evicted { id } => info!(id, "Evicted entity to store"),
            CacheEvent::Removed { id } => info!(id, "Entity removed from cache and store"),
            CacheEvent::RemovedAll => info!("All entities removed from cache and store"),
            CacheEvent::Cleared { dropped } => info!(dropped, "Cache cleared"),
            CacheEvent::Fault { operation, error } => {
                warn!(operation, error = %error, "Cache operation failed")
            }
            CacheEvent::StoreSaved { id } => debug!(id, "Saved to store"),
            CacheEvent::StoreRemoved { id, existed } => {
                debug!(id, existed, "Removed from store")
            }
            CacheEvent::StoreCleared { dropped } => info!(dropped, "Store cleared"),
            CacheEvent::StoreLookup { id, found } => debug!(id, found, "Store lookup"),
        }
    }
}

// == Noop Observer ==
/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record(&self, _event: &CacheEvent<'_>) {}
}
