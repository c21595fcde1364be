//! Frontend Models
//!
//! Data structures shared with the core crate.

pub use todo_core::{Item, LocalPatch, RemoteConfig, Status, StatusFilter, ViewState};

/// Item whose title is being edited in the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub id: String,
    /// Draft title, written back on save
    pub title: String,
}

impl EditTarget {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
        }
    }
}
