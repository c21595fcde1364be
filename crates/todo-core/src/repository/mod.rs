//! Repository Layer
//!
//! Document collection abstraction and its implementations.

mod firestore;
mod memory;
mod traits;


pub use firestore::FirestoreCollection;
pub use memory::{MemoryCollection, Operation};
pub use traits::DocumentCollection;
