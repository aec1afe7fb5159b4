//! Request DTOs for the cache tier API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{Entity, MAX_ID_LENGTH};

/// Request body for the ADD operation (PUT /add)
///
/// # Fields
/// - `id`: The entity id
/// - `data`: Arbitrary JSON payload, stored as-is (defaults to `null`)
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    pub id: String,
    #[serde(default)]
    pub data: Value,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("Id cannot be empty".to_string());
        }
        if self.id.len() > MAX_ID_LENGTH {
            return Some(format!(
                "Id exceeds maximum length of {} bytes",
                MAX_ID_LENGTH
            ));
        }
        None
    }

    pub fn into_entity(self) -> Entity<Value> {
        Entity::new(self.id, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_deserialize() {
        let json = r#"{"id": "1", "data": {"name": "Data 1"}}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, "1");
        assert_eq!(req.data["name"], "Data 1");
    }

    #[test]
    fn test_add_request_data_defaults_to_null() {
        let json = r#"{"id": "1"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert!(req.data.is_null());
    }

    #[test]
    fn test_validate_empty_id() {
        let req = AddRequest {
            id: "".to_string(),
            data: Value::Null,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_id_too_long() {
        let req = AddRequest {
            id: "x".repeat(MAX_ID_LENGTH + 1),
            data: Value::Null,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_into_entity() {
        let req = AddRequest {
            id: "valid_id".to_string(),
            data: Value::from(7),
        };
        assert!(req.validate().is_none());

        let entity = req.into_entity();
        assert_eq!(entity.id(), "valid_id");
        assert_eq!(entity.data(), &Value::from(7));
    }
}
