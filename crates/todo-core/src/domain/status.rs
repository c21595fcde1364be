//! Todo Status
//!
//! Progress state of an item. The stored strings are `notStarted`, `doing`
//! and `done`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress state of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "notStarted")]
    NotStarted,
    #[serde(rename = "doing")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Status; 3] = [Status::NotStarted, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "notStarted",
            Status::InProgress => "doing",
            Status::Done => "done",
        }
    }

    /// Parse a stored status string. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "notStarted" => Some(Status::NotStarted),
            "doing" => Some(Status::InProgress),
            "done" => Some(Status::Done),
            _ => None,
        }
    }

    /// Human readable label for selects
    pub fn label(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not started",
            Status::InProgress => "In progress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::InProgress.as_str(), "doing");
        assert_eq!(Status::parse("in-progress"), None);
        assert_eq!(Status::default(), Status::NotStarted);
    }

    #[test]
    fn test_status_serde_matches_stored_form() {
        let json = serde_json::to_string(&Status::NotStarted).unwrap();
        assert_eq!(json, "\"notStarted\"");
        let parsed: Status = serde_json::from_str("\"doing\"").unwrap();
        assert_eq!(parsed, Status::InProgress);
    }
}
