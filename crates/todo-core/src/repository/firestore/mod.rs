//! Firestore Collection
//!
//! `DocumentCollection` over the Firestore REST v1 API.

mod wire;


use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};

use super::traits::DocumentCollection;
use crate::config::RemoteConfig;
use crate::domain::{Document, Fields, RemoteError, RemoteResult, TodoResult};
use wire::{decode_document, document_id, encode_fields, ListResponse, WireDocument};

const PAGE_SIZE: u32 = 300;

/// Firestore REST client bound to one collection
pub struct FirestoreCollection {
    config: RemoteConfig,
    http_client: reqwest::Client,
}

impl FirestoreCollection {
    /// Create a client; fails if the config is incomplete
    pub fn new(config: RemoteConfig) -> TodoResult<Self> {
        config.validate()?;
        Ok(Self { config, http_client: reqwest::Client::new() })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .http_client
            .request(method, url)
            .query(&[("key", self.config.api_key.as_str())]);
        match &self.config.id_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> RemoteResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(body));
        }
        Err(RemoteError::Status { status: status.as_u16(), body })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> RemoteResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| RemoteError::Decode(format!("{}; raw response: {}", e, text)))
    }
}

#[async_trait(?Send)]
impl DocumentCollection for FirestoreCollection {
    async fn list(&self) -> RemoteResult<Vec<Document>> {
        let url = self.config.collection_url();
        let mut docs = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut builder = self
                .request(Method::GET, &url)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                builder = builder.query(&[("pageToken", token.as_str())]);
            }
            log::debug!("GET {} (page token: {:?})", url, page_token);

            let page: ListResponse = Self::read_json(self.send(builder).await?).await?;
            for raw in page.documents {
                match decode_document(raw) {
                    Ok(doc) => docs.push(doc),
                    Err(e) => log::warn!("Skipping document: {}", e),
                }
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(docs)
    }

    async fn insert(&self, fields: Fields) -> RemoteResult<String> {
        let url = self.config.collection_url();
        log::debug!("POST {} ({} fields)", url, fields.len());

        let builder = self.request(Method::POST, &url).json(&encode_fields(&fields));
        let created: WireDocument = Self::read_json(self.send(builder).await?).await?;
        document_id(&created.name)
            .map(str::to_string)
            .ok_or_else(|| RemoteError::Decode(format!("bad document name {:?}", created.name)))
    }

    async fn update_fields(&self, id: &str, fields: Fields) -> RemoteResult<()> {
        let url = self.config.document_url(id);
        log::debug!("PATCH {} {:?}", url, fields.keys().collect::<Vec<_>>());

        let mut query: Vec<(&str, &str)> = fields
            .keys()
            .map(|name| ("updateMask.fieldPaths", name.as_str()))
            .collect();
        query.push(("currentDocument.exists", "true"));

        let builder = self
            .request(Method::PATCH, &url)
            .query(&query)
            .json(&encode_fields(&fields));
        self.send(builder).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        let url = self.config.document_url(id);
        log::debug!("DELETE {}", url);

        self.send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoError;

    #[test]
    fn test_rejects_incomplete_config() {
        let result = FirestoreCollection::new(RemoteConfig::new("demo", ""));
        assert!(matches!(result, Err(TodoError::Config(_))));
    }

    #[test]
    fn test_request_carries_key_and_token() {
        let mut config = RemoteConfig::new("demo", "secret");
        config.id_token = Some("tok".into());
        let collection = FirestoreCollection::new(config).unwrap();

        let request = collection
            .request(Method::GET, &collection.config().collection_url())
            .build()
            .unwrap();
        assert_eq!(request.url().query(), Some("key=secret"));
        assert_eq!(
            request.headers().get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
    }
}
