//! API Module
//!
//! HTTP handlers and routing for the cache tier REST API.
//!
//! # Endpoints
//! - `PUT /add` - Add (or refresh) an entity
//! - `GET /get/:id` - Read an entity, falling back to the store
//! - `DELETE /remove/:id` - Remove an entity from cache and store
//! - `DELETE /remove_all` - Empty cache and store
//! - `POST /clear` - Empty the cache only
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
