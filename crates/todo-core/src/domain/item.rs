//! Item Entity
//!
//! A single todo record. `id`, `status` and `title` are authoritative on the
//! remote side; `display_expanded` and `detail_text` are written once on
//! create and afterwards only change locally.

use serde::{Deserialize, Serialize};

use super::document::{Document, FieldValue, Fields};
use super::error::RemoteError;
use super::status::Status;

/// Stored field names
pub const FIELD_STATUS: &str = "status";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DISPLAY: &str = "display";
pub const FIELD_TEXT: &str = "text";

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque id assigned by the remote store
    pub id: String,
    pub status: Status,
    pub title: String,
    /// Whether the detail editor is open (local UI flag)
    #[serde(rename = "display", default)]
    pub display_expanded: bool,
    /// Free-form detail text (edited locally only)
    #[serde(rename = "text", default)]
    pub detail_text: String,
}

impl Item {
    /// Create an item with default status and empty detail fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Status::default(),
            title: title.into(),
            display_expanded: false,
            detail_text: String::new(),
        }
    }

    /// Fields written when a new item is inserted
    pub fn initial_fields(title: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_STATUS.into(), FieldValue::Text(Status::default().as_str().into()));
        fields.insert(FIELD_TITLE.into(), FieldValue::Text(title.into()));
        fields.insert(FIELD_DISPLAY.into(), FieldValue::Bool(false));
        fields.insert(FIELD_TEXT.into(), FieldValue::Text(String::new()));
        fields
    }

    /// Partial update touching only the title
    pub fn title_fields(title: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.into(), FieldValue::Text(title.into()));
        fields
    }

    /// Partial update touching only the status
    pub fn status_fields(status: Status) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_STATUS.into(), FieldValue::Text(status.as_str().into()));
        fields
    }

    /// Decode a stored document.
    ///
    /// `title` and a known `status` are required. Missing `display`/`text`
    /// fall back to their defaults.
    pub fn from_document(doc: &Document) -> Result<Self, RemoteError> {
        let title = doc
            .text(FIELD_TITLE)
            .ok_or_else(|| RemoteError::Decode(format!("document {} has no title", doc.id)))?;
        let raw_status = doc
            .text(FIELD_STATUS)
            .ok_or_else(|| RemoteError::Decode(format!("document {} has no status", doc.id)))?;
        let status = Status::parse(raw_status).ok_or_else(|| {
            RemoteError::Decode(format!("document {} has unknown status {:?}", doc.id, raw_status))
        })?;

        Ok(Self {
            id: doc.id.clone(),
            status,
            title: title.to_string(),
            display_expanded: doc.flag(FIELD_DISPLAY).unwrap_or(false),
            detail_text: doc.text(FIELD_TEXT).unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, fields: Fields) -> Document {
        Document::new(id, fields)
    }

    #[test]
    fn test_item_creation() {
        let item = Item::new("a1", "Buy milk");
        assert_eq!(item.id, "a1");
        assert_eq!(item.status, Status::NotStarted);
        assert!(!item.display_expanded);
        assert!(item.detail_text.is_empty());
    }

    #[test]
    fn test_initial_fields_decode_back() {
        let item = Item::from_document(&doc("x", Item::initial_fields("Walk dog"))).unwrap();
        assert_eq!(item, Item::new("x", "Walk dog"));
    }

    #[test]
    fn test_partial_fields_touch_one_key() {
        let fields = Item::status_fields(Status::Done);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[FIELD_STATUS], FieldValue::Text("done".into()));

        let fields = Item::title_fields("New");
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec![FIELD_TITLE]);
    }

    #[test]
    fn test_missing_local_fields_default() {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.into(), FieldValue::Text("t".into()));
        fields.insert(FIELD_STATUS.into(), FieldValue::Text("doing".into()));
        let item = Item::from_document(&doc("y", fields)).unwrap();
        assert_eq!(item.status, Status::InProgress);
        assert!(!item.display_expanded);
        assert_eq!(item.detail_text, "");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut fields = Item::initial_fields("t");
        fields.insert(FIELD_STATUS.into(), FieldValue::Text("archived".into()));
        let err = Item::from_document(&doc("z", fields)).unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[test]
    fn test_serde_uses_stored_names() {
        let json = serde_json::to_value(Item::new("a", "b")).unwrap();
        assert_eq!(json["status"], "notStarted");
        assert_eq!(json["display"], false);
        assert_eq!(json["text"], "");
    }
}
