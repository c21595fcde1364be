//! Remote Command Wrappers
//!
//! Frontend bindings to the todo collection, organized by concern.

mod config;
mod dialog;
mod todo;

// Re-export all public items
pub use config::*;
pub use dialog::*;
pub use todo::*;
