//! Remote Sync Adapter
//!
//! Every mutation is awaited and then followed by a full refetch of the
//! collection. The refetched list is returned so the caller can replace its
//! view state with it.

use crate::domain::{Item, Status, TodoError, TodoResult};
use crate::repository::DocumentCollection;

/// Todo operations against one document collection
pub struct TodoSync<C> {
    collection: C,
}

impl<C: DocumentCollection> TodoSync<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Load every item. Documents that do not decode are skipped.
    pub async fn list(&self) -> TodoResult<Vec<Item>> {
        let docs = self.collection.list().await?;
        let items: Vec<Item> = docs
            .iter()
            .filter_map(|doc| match Item::from_document(doc) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping document {}: {}", doc.id, e);
                    None
                }
            })
            .collect();
        log::info!("Loaded {} of {} documents", items.len(), docs.len());
        Ok(items)
    }

    /// Insert a new item, then refetch.
    ///
    /// An empty title is rejected before any remote call. A failed insert is
    /// logged and the refetch still runs.
    pub async fn create(&self, title: &str) -> TodoResult<Vec<Item>> {
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        match self.collection.insert(Item::initial_fields(title)).await {
            Ok(id) => log::info!("Document written with ID: {}", id),
            Err(e) => log::error!("Error adding document: {}", e),
        }
        self.list().await
    }

    /// Delete by id, then refetch
    pub async fn delete(&self, id: &str) -> TodoResult<Vec<Item>> {
        self.collection.delete(id).await?;
        self.list().await
    }

    /// Change the title of one item, then refetch
    pub async fn update_title(&self, id: &str, title: &str) -> TodoResult<Vec<Item>> {
        self.collection.update_fields(id, Item::title_fields(title)).await?;
        self.list().await
    }

    /// Change the status of one item, then refetch
    pub async fn update_status(&self, id: &str, status: Status) -> TodoResult<Vec<Item>> {
        self.collection.update_fields(id, Item::status_fields(status)).await?;
        self.list().await
    }
}
