//! Repository Layer - Core Traits
//!
//! Defines the abstract interface to a document collection.
//! Implementations can use Firestore, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{Document, Fields, RemoteResult};

/// CRUD access to one remote document collection
///
/// Futures are not required to be `Send`: in the browser every request is a
/// `fetch` promise pinned to the main thread.
#[async_trait(?Send)]
pub trait DocumentCollection {
    /// Every document, in the order the store returns them
    async fn list(&self) -> RemoteResult<Vec<Document>>;

    /// Insert a new document and return its store-assigned id
    async fn insert(&self, fields: Fields) -> RemoteResult<String>;

    /// Overwrite only the given fields of an existing document
    async fn update_fields(&self, id: &str, fields: Fields) -> RemoteResult<()>;

    /// Delete by id
    async fn delete(&self, id: &str) -> RemoteResult<()>;
}
