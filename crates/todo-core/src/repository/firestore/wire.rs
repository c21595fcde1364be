//! Firestore REST Wire Format
//!
//! Typed values are objects keyed by kind (`{"stringValue": "x"}`). Only the
//! kinds todo documents use are modelled; other kinds decode to an empty
//! `Value` and are dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Document, FieldValue, Fields, RemoteError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => Value { string_value: Some(s.clone()), ..Default::default() },
            FieldValue::Bool(b) => Value { boolean_value: Some(*b), ..Default::default() },
        }
    }
}

impl Value {
    fn into_field(self) -> Option<FieldValue> {
        match (self.string_value, self.boolean_value) {
            (Some(s), _) => Some(FieldValue::Text(s)),
            (None, Some(b)) => Some(FieldValue::Bool(b)),
            (None, None) => None,
        }
    }
}

/// Document body as sent and received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDocument {
    /// Full resource name, `projects/.../documents/<collection>/<id>`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

/// One page of a collection listing; an empty collection answers `{}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default)]
    pub documents: Vec<WireDocument>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Request body for insert/patch
pub fn encode_fields(fields: &Fields) -> WireDocument {
    WireDocument {
        name: String::new(),
        fields: fields.iter().map(|(k, v)| (k.clone(), Value::from(v))).collect(),
    }
}

/// Last path segment of a resource name
pub fn document_id(name: &str) -> Option<&str> {
    name.rsplit('/').next().filter(|id| !id.is_empty())
}

pub fn decode_document(doc: WireDocument) -> Result<Document, RemoteError> {
    let id = document_id(&doc.name)
        .ok_or_else(|| RemoteError::Decode(format!("bad document name {:?}", doc.name)))?
        .to_string();
    let fields = doc
        .fields
        .into_iter()
        .filter_map(|(k, v)| v.into_field().map(|v| (k, v)))
        .collect();
    Ok(Document::new(id, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    const PAGE: &str = r#"{
        "documents": [
            {
                "name": "projects/demo/databases/(default)/documents/todoList/Ab12Cd",
                "fields": {
                    "title": {"stringValue": "Buy milk"},
                    "status": {"stringValue": "notStarted"},
                    "display": {"booleanValue": false},
                    "text": {"stringValue": ""},
                    "createdAt": {"timestampValue": "2024-01-01T00:00:00Z"}
                },
                "createTime": "2024-01-01T00:00:00.000000Z",
                "updateTime": "2024-01-01T00:00:00.000000Z"
            }
        ],
        "nextPageToken": "next"
    }"#;

    #[test]
    fn test_decode_list_page() {
        let page: ListResponse = serde_json::from_str(PAGE).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("next"));

        let doc = decode_document(page.documents.into_iter().next().unwrap()).unwrap();
        assert_eq!(doc.id, "Ab12Cd");
        // unsupported value kinds are dropped
        assert!(!doc.fields.contains_key("createdAt"));

        let item = Item::from_document(&doc).unwrap();
        assert_eq!(item, Item::new("Ab12Cd", "Buy milk"));
    }

    #[test]
    fn test_empty_collection_body() {
        let page: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_encode_fields() {
        let body = serde_json::to_value(encode_fields(&Item::initial_fields("Walk"))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "fields": {
                    "display": {"booleanValue": false},
                    "status": {"stringValue": "notStarted"},
                    "text": {"stringValue": ""},
                    "title": {"stringValue": "Walk"}
                }
            })
        );
    }

    #[test]
    fn test_document_id() {
        assert_eq!(document_id("a/b/todoList/xyz"), Some("xyz"));
        assert_eq!(document_id("a/b/"), None);
        assert_eq!(document_id("plain"), Some("plain"));
    }
}
