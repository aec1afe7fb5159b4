//! Response DTOs for the cache tier API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, Entity};

/// Response body for the GET operation (GET /get/:id)
#[derive(Debug, Clone, Serialize)]
pub struct EntityResponse {
    pub id: String,
    pub data: Value,
}

impl From<Entity<Value>> for EntityResponse {
    fn from(entity: Entity<Value>) -> Self {
        let (id, data) = entity.into_parts();
        Self { id, data }
    }
}

/// Response body for the ADD operation (PUT /add)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The id that was added or refreshed
    pub id: String,
}

impl AddResponse {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            message: format!("Entity '{}' added successfully", id),
            id,
        }
    }
}

/// Response body for the REMOVE operation (DELETE /remove/:id)
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    /// Success message
    pub message: String,
    /// The id that was removed
    pub id: String,
}

impl RemoveResponse {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            message: format!("Entity '{}' removed from cache and store", id),
            id,
        }
    }
}

/// Response body for the bulk operations (DELETE /remove_all, POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cache_only() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }

    pub fn everything() -> Self {
        Self {
            message: "All entities removed from cache and store".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads served from memory
    pub hits: u64,
    /// Reads that fell through to the store
    pub misses: u64,
    /// Misses promoted back from the store
    pub promotions: u64,
    /// Entities moved to the store
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, max_size: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            promotions: stats.promotions,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            max_size,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
