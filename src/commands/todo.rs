//! Todo Commands
//!
//! Each call builds a Firestore-backed `TodoSync` from the current config,
//! runs one mutation and returns the refetched list.

use todo_core::{FirestoreCollection, TodoResult, TodoSync};

use crate::models::{Item, RemoteConfig, Status};

fn remote(config: &RemoteConfig) -> TodoResult<TodoSync<FirestoreCollection>> {
    Ok(TodoSync::new(FirestoreCollection::new(config.clone())?))
}

// ========================
// Commands
// ========================

pub async fn list_todos(config: &RemoteConfig) -> TodoResult<Vec<Item>> {
    remote(config)?.list().await
}

pub async fn create_todo(config: &RemoteConfig, title: &str) -> TodoResult<Vec<Item>> {
    remote(config)?.create(title).await
}

pub async fn delete_todo(config: &RemoteConfig, id: &str) -> TodoResult<Vec<Item>> {
    remote(config)?.delete(id).await
}

pub async fn update_todo_title(config: &RemoteConfig, id: &str, title: &str) -> TodoResult<Vec<Item>> {
    remote(config)?.update_title(id, title).await
}

pub async fn update_todo_status(config: &RemoteConfig, id: &str, status: Status) -> TodoResult<Vec<Item>> {
    remote(config)?.update_status(id, status).await
}
