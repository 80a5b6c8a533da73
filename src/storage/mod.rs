//! Entity storage.
//!
//! `traits` defines the backend contract; `memory` is the process-local
//! implementation used by the server.

mod memory;
mod traits;

pub use memory::InMemoryEntityStore;
pub use traits::{EntityStore, StorageError};
