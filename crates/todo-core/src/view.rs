//! View State
//!
//! In-memory copy of the collection plus the current filter. It is replaced
//! wholesale after every refetch; local patches only live until then.

use crate::domain::{project, Item, Status, StatusFilter};

/// Change to a field that is never written back to the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalPatch {
    /// Flip `display_expanded`
    ToggleExpanded,
    SetDetailText(String),
}

/// Items as of the last refetch, and the filter applied to them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    items: Vec<Item>,
    filter: StatusFilter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh listing
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Apply a local-only patch to the item with `id`.
    ///
    /// Returns `false` if no such item is loaded.
    pub fn patch_local(&mut self, id: &str, patch: LocalPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match patch {
            LocalPatch::ToggleExpanded => item.display_expanded = !item.display_expanded,
            LocalPatch::SetDetailText(text) => item.detail_text = text,
        }
        true
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Status of `id` as of the last refetch
    pub fn status_of(&self, id: &str) -> Option<Status> {
        self.get(id).map(|item| item.status)
    }

    /// The filtered list to render
    pub fn visible(&self) -> Vec<Item> {
        project(&self.items, self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> ViewState {
        let mut view = ViewState::new();
        view.replace_all(vec![
            Item::new("a", "First"),
            Item { status: Status::Done, ..Item::new("b", "Second") },
        ]);
        view
    }

    #[test]
    fn test_patch_local_fields() {
        let mut view = loaded();
        assert!(view.patch_local("a", LocalPatch::ToggleExpanded));
        assert!(view.patch_local("a", LocalPatch::SetDetailText("notes".into())));

        let item = view.get("a").unwrap();
        assert!(item.display_expanded);
        assert_eq!(item.detail_text, "notes");
        assert!(!view.get("b").unwrap().display_expanded);
    }

    #[test]
    fn test_patch_unknown_id() {
        let mut view = loaded();
        let before = view.clone();
        assert!(!view.patch_local("missing", LocalPatch::ToggleExpanded));
        assert_eq!(view, before);
    }

    #[test]
    fn test_replace_all_discards_local_patches() {
        let mut view = loaded();
        view.patch_local("a", LocalPatch::SetDetailText("scratch".into()));
        view.replace_all(vec![Item::new("a", "First")]);
        assert_eq!(view.get("a").unwrap().detail_text, "");
        assert!(view.get("b").is_none());
    }

    #[test]
    fn test_visible_follows_filter() {
        let mut view = loaded();
        assert_eq!(view.visible().len(), 2);
        view.set_filter(StatusFilter::Only(Status::Done));
        assert_eq!(view.filter(), StatusFilter::Only(Status::Done));
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b");
        // filter survives a reload
        view.replace_all(vec![Item::new("c", "Third")]);
        assert!(view.visible().is_empty());
    }
}
