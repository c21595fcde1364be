//! Todo Core
//!
//! Layered architecture:
//! - domain: items, statuses, filter projection, errors
//! - repository: document collection trait with Firestore and in-memory backends
//! - sync: mutate-then-refetch operations over a collection
//! - view: local view state replaced after every refetch

pub mod config;
pub mod domain;
pub mod repository;
pub mod sync;
pub mod view;

pub use config::RemoteConfig;
pub use domain::{project, Item, RemoteError, Status, StatusFilter, TodoError, TodoResult};
pub use repository::{DocumentCollection, FirestoreCollection, MemoryCollection, Operation};
pub use sync::TodoSync;
pub use view::{LocalPatch, ViewState};
