//! Filter Projection
//!
//! Derives the visible subset of items from the full list and the selected
//! filter. Order is whatever the remote listing returned.

use serde::{Deserialize, Serialize};

use super::item::Item;
use super::status::Status;

/// Filter selection for the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    /// Every selectable filter in display order
    pub fn options() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Only(Status::NotStarted),
            StatusFilter::Only(Status::InProgress),
            StatusFilter::Only(Status::Done),
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Parse a select value. Anything unrecognised means `All`.
    pub fn parse(s: &str) -> Self {
        Status::parse(s).map(StatusFilter::Only).unwrap_or(StatusFilter::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => item.status == *status,
        }
    }
}

/// Items visible under `filter`, in their original order
pub fn project(items: &[Item], filter: StatusFilter) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}
