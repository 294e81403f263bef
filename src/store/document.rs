//! # Document Model
//!
//! A document is a store-assigned id plus an opaque JSON field map.
//! No schema is enforced beyond what individual services read out of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identifier, immutable
    pub id: String,

    /// Arbitrary fields
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a document with a known id
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get a field as a string slice
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Overlay new fields onto this document, preserving omitted ones
    pub fn merge(&mut self, updates: Map<String, Value>) {
        for (key, value) in updates {
            self.fields.insert(key, value);
        }
    }

    /// Flatten into a single JSON object with the id included
    pub fn to_value(&self) -> Value {
        let mut obj = self.fields.clone();
        obj.insert("id".to_string(), Value::String(self.id.clone()));
        Value::Object(obj)
    }
}
