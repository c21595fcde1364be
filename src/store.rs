//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{EditTarget, Item, LocalPatch, RemoteConfig, Status, StatusFilter, ViewState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items as of the last refetch, plus the filter selection
    pub view: ViewState,
    /// Title edit in progress (None = entry form is in create mode)
    pub editing: Option<EditTarget>,
    /// Remote collection settings (None until configured)
    pub config: Option<RemoteConfig>,
}

impl AppState {
    pub fn new(config: Option<RemoteConfig>) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace all items with a fresh listing
pub fn store_replace_items(store: &AppStore, items: Vec<Item>) {
    store.view().write().replace_all(items);
}

/// Patch a local-only field of one item
pub fn store_patch_item(store: &AppStore, id: &str, patch: LocalPatch) -> bool {
    store.view().write().patch_local(id, patch)
}

/// Status of one item as of the last refetch
pub fn store_item_status(store: &AppStore, id: &str) -> Option<Status> {
    store.view().read().status_of(id)
}

/// Items passing the current filter
pub fn store_visible_items(store: &AppStore) -> Vec<Item> {
    store.view().read().visible()
}

/// Full list regardless of filter
pub fn store_all_items(store: &AppStore) -> Vec<Item> {
    store.view().read().items().to_vec()
}

pub fn store_filter(store: &AppStore) -> StatusFilter {
    store.view().read().filter()
}

pub fn store_set_filter(store: &AppStore, filter: StatusFilter) {
    store.view().write().set_filter(filter);
}

pub fn store_config(store: &AppStore) -> Option<RemoteConfig> {
    store.config().get()
}

pub fn store_set_config(store: &AppStore, config: RemoteConfig) {
    store.config().set(Some(config));
}

pub fn store_editing(store: &AppStore) -> Option<EditTarget> {
    store.editing().get()
}

pub fn store_set_editing(store: &AppStore, target: Option<EditTarget>) {
    store.editing().set(target);
}

/// Update the draft title of the current edit
pub fn store_set_edit_title(store: &AppStore, title: String) {
    if let Some(target) = &mut *store.editing().write() {
        target.title = title;
    }
}
