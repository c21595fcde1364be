//! Domain Layer
//!
//! Todo entities, status values and the filter projection.
//! Nothing in here talks to the network.

mod document;
mod error;
mod filter;
mod item;
mod status;

pub use document::{Document, FieldValue, Fields};
pub use error::{RemoteError, RemoteResult, TodoError, TodoResult};
pub use filter::{project, StatusFilter};
pub use item::{Item, FIELD_DISPLAY, FIELD_STATUS, FIELD_TEXT, FIELD_TITLE};
pub use status::Status;
