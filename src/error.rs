//! Error types for the cache tier
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache, its backing store and the HTTP layer.
///
/// A lookup miss is not an error in the core; it is reported as `None`.
/// `NotFound` only exists so the HTTP layer can answer 404.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Rejected configuration (e.g. a non-positive capacity)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The backing store's medium failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found in either tier
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache tier.
pub type Result<T> = std::result::Result<T, CacheError>;
