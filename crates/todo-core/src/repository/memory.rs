//! In-Memory Collection
//!
//! Process-local stand-in for the hosted collection. Keeps insertion order,
//! hands out sequential ids and can be told to fail the next call of a given
//! kind.

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::Mutex;

use super::traits::DocumentCollection;
use crate::domain::{Document, Fields, RemoteError, RemoteResult};

/// Collection operation kinds, used for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Insert,
    Update,
    Delete,
}

impl Operation {
    fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

#[derive(Default)]
struct Inner {
    docs: Vec<Document>,
    next_id: u32,
    armed: HashSet<Operation>,
    writes: usize,
}

impl Inner {
    fn take_failure(&mut self, op: Operation) -> RemoteResult<()> {
        if self.armed.remove(&op) {
            return Err(RemoteError::Injected(op.name()));
        }
        Ok(())
    }
}

/// Document collection held in memory
#[derive(Default)]
pub struct MemoryCollection {
    inner: Mutex<Inner>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call of `op` fail with `RemoteError::Injected`
    pub async fn fail_next(&self, op: Operation) {
        self.inner.lock().await.armed.insert(op);
    }

    /// Number of successful writes (insert, update, delete) so far
    pub async fn write_count(&self) -> usize {
        self.inner.lock().await.writes
    }

    /// Current documents, bypassing failure injection
    pub async fn snapshot(&self) -> Vec<Document> {
        self.inner.lock().await.docs.clone()
    }
}

#[async_trait(?Send)]
impl DocumentCollection for MemoryCollection {
    async fn list(&self) -> RemoteResult<Vec<Document>> {
        let mut inner = self.inner.lock().await;
        inner.take_failure(Operation::List)?;
        Ok(inner.docs.clone())
    }

    async fn insert(&self, fields: Fields) -> RemoteResult<String> {
        let mut inner = self.inner.lock().await;
        inner.take_failure(Operation::Insert)?;
        inner.next_id += 1;
        let id = format!("doc-{:04}", inner.next_id);
        inner.docs.push(Document::new(id.clone(), fields));
        inner.writes += 1;
        Ok(id)
    }

    async fn update_fields(&self, id: &str, fields: Fields) -> RemoteResult<()> {
        let mut inner = self.inner.lock().await;
        inner.take_failure(Operation::Update)?;
        let doc = inner
            .docs
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))?;
        doc.fields.extend(fields);
        inner.writes += 1;
        Ok(())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        let mut inner = self.inner.lock().await;
        inner.take_failure(Operation::Delete)?;
        // deleting a missing document is not an error
        inner.docs.retain(|doc| doc.id != id);
        inner.writes += 1;
        Ok(())
    }
}
