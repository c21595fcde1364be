//! Domain Errors
//!
//! Error taxonomy shared by the sync adapter and the collection backends.

use thiserror::Error;

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Result type for raw collection calls
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors surfaced by todo operations
#[derive(Debug, Error)]
pub enum TodoError {
    /// Create was called with an empty title; nothing was written
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("remote collection error: {0}")]
    Remote(#[from] RemoteError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failures talking to the document collection
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("remote answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("document not found: {0}")]
    NotFound(String),
    /// Raised by `MemoryCollection` when a failure was armed for the operation
    #[error("injected failure on {0}")]
    Injected(&'static str),
}

impl TodoError {
    /// Validation errors are shown to the user, everything else is only logged
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::EmptyTitle)
    }
}
