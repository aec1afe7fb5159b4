//! Cache Module
//!
//! Provides a bounded in-memory working set with LRU eviction into a
//! backing store and promotion back out of it on read.

mod bounded;
mod entity;
mod lru;
mod stats;


// Re-export public types
pub use bounded::BoundedCache;
pub use entity::Entity;
pub(crate) use lru::LruTracker;
pub use stats::CacheStats;

// == Public Constants ==
/// Maximum allowed entity id length in bytes
pub const MAX_ID_LENGTH: usize = 256;
