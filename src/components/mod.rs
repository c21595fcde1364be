//! UI Components
//!
//! Reusable Leptos components.

mod config_modal;
mod filter_bar;
mod todo_form;
mod todo_list;
mod todo_row;

pub use config_modal::ConfigModal;
pub use filter_bar::{FilterBar, StatusSelect};
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
