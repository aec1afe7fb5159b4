//! Entity Module
//!
//! Defines the record handled by both the cache and the backing store.

use serde::{Deserialize, Serialize};

// == Entity ==
/// A uniquely identified record with an opaque payload.
///
/// Two entities are the same logical item iff their ids are equal. The
/// payload is never inspected by the cache or the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<T> {
    id: String,
    data: T,
}

impl<T> Entity<T> {
    // == Constructor ==
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Returns the unique id of the entity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the entity and returns its payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Splits the entity into its id and payload.
    pub fn into_parts(self) -> (String, T) {
        (self.id, self.data)
    }
}
