//! Tiered Cache - A bounded LRU cache in front of a backing store
//!
//! Keeps a fixed number of entities in memory, spills the least recently
//! used one into the store when full, and promotes store hits back on read.

pub mod api;
pub mod backing;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod observe;

pub use api::AppState;
pub use backing::{BackingStore, MemoryStore};
pub use cache::{BoundedCache, Entity};
pub use config::Config;
pub use error::{CacheError, Result};
