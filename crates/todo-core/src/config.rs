//! Remote Configuration
//!
//! Connection settings for the hosted document collection.

use serde::{Deserialize, Serialize};

use crate::domain::{TodoError, TodoResult};

pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_COLLECTION: &str = "todoList";
pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

/// Firestore project and collection to mirror
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub project_id: String,
    pub api_key: String,
    /// REST root, overridable for emulators
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Firebase Auth ID token, sent as a bearer token when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl RemoteConfig {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            database: default_database(),
            collection: default_collection(),
            id_token: None,
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> TodoResult<Self> {
        let config: RemoteConfig =
            serde_json::from_str(json).map_err(|e| TodoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> TodoResult<String> {
        serde_json::to_string(self).map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn validate(&self) -> TodoResult<()> {
        if self.project_id.trim().is_empty() {
            return Err(TodoError::Config("project_id is empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(TodoError::Config("api_key is empty".into()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(TodoError::Config(format!("invalid endpoint {:?}", self.endpoint)));
        }
        if self.collection.is_empty() || self.collection.contains('/') {
            return Err(TodoError::Config(format!("invalid collection name {:?}", self.collection)));
        }
        Ok(())
    }

    /// Documents root for this project and database
    pub fn base_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url(), self.collection)
    }

    pub fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let config = RemoteConfig::from_json(r#"{"project_id":"demo","api_key":"k"}"#).unwrap();
        assert_eq!(config.database, "(default)");
        assert_eq!(config.collection, "todoList");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.id_token, None);
    }

    #[test]
    fn test_urls() {
        let config = RemoteConfig::new("demo", "k");
        assert_eq!(
            config.collection_url(),
            "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents/todoList"
        );
        assert!(config.document_url("abc").ends_with("/documents/todoList/abc"));

        let mut emulator = RemoteConfig::new("demo", "k");
        emulator.endpoint = "http://127.0.0.1:8080/v1/".into();
        assert_eq!(
            emulator.collection_url(),
            "http://127.0.0.1:8080/v1/projects/demo/databases/(default)/documents/todoList"
        );
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            RemoteConfig::from_json(r#"{"project_id":"","api_key":"k"}"#),
            Err(TodoError::Config(_))
        ));
        assert!(RemoteConfig::from_json("not json").is_err());

        let mut config = RemoteConfig::new("demo", "k");
        config.collection = "a/b".into();
        assert!(config.validate().is_err());

        let mut config = RemoteConfig::new("demo", "k");
        config.endpoint = "localhost:8080".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_token() {
        let mut config = RemoteConfig::new("demo", "k");
        config.id_token = Some("tok".into());
        let parsed = RemoteConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
