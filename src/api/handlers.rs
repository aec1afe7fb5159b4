//! API Handlers
//!
//! HTTP request handlers for each cache tier endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::backing::MemoryStore;
use crate::cache::BoundedCache;
use crate::error::{CacheError, Result};
use crate::models::{
    AddRequest, AddResponse, ClearResponse, EntityResponse, HealthResponse, RemoveResponse,
    StatsResponse,
};

/// The cache type served over HTTP: JSON payloads over an in-memory store.
pub type JsonCache = BoundedCache<Value, MemoryStore<Value>>;

/// Application state shared across all handlers.
///
/// Every operation, reads included, takes the write lock: reads update
/// recency and may promote from the store, so each request runs as one
/// critical section.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<RwLock<JsonCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: JsonCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is rejected by the cache.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        let cache = BoundedCache::new(config.max_size, MemoryStore::new())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /add
///
/// Adds an entity, or refreshes it if already resident.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let id = req.id.clone();
    let mut cache = state.cache.write().await;
    cache.add(req.into_entity())?;

    Ok(Json(AddResponse::new(id)))
}

/// Handler for GET /get/:id
///
/// Reads from the cache, falling back to the store.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntityResponse>> {
    // Write lock: a read touches recency and may promote
    let mut cache = state.cache.write().await;
    let entity = cache.get(&id).ok_or(CacheError::NotFound(id))?;

    Ok(Json(entity.into()))
}

/// Handler for DELETE /remove/:id
///
/// Unknown ids succeed as well.
pub async fn remove_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>> {
    let mut cache = state.cache.write().await;
    cache.remove(&id)?;

    Ok(Json(RemoveResponse::new(id)))
}

/// Handler for DELETE /remove_all
pub async fn remove_all_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    let mut cache = state.cache.write().await;
    cache.remove_all()?;

    Ok(Json(ClearResponse::everything()))
}

/// Handler for POST /clear
///
/// Drops the in-memory tier; the store is left alone.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    Json(ClearResponse::cache_only())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.max_size()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
