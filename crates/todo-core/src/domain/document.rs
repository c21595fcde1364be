//! Raw Documents
//!
//! Backend-neutral shape of a stored document: an id plus named scalar fields.

use std::collections::BTreeMap;

/// Field name -> value, ordered so encoded bodies are deterministic
pub type Fields = BTreeMap<String, FieldValue>;

/// Scalar values the todo documents use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// A document as returned by a collection listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Id assigned by the store
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self { id: id.into(), fields }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(FieldValue::as_bool)
    }
}
