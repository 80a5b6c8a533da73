//! # Entity Registry
//!
//! An in-memory registry of person records exposed as a small REST resource.
//! Records carry names, addresses, dated events, a deceased flag and a gender,
//! and are listed through a conjunction of optional filters.
//!
//! ## Core Concepts
//!
//! - **Entity**: A person record with a store-assigned, immutable id
//! - **EntityDraft**: The caller-supplied contents of an entity (everything but the id)
//! - **EntityFilter**: Independently optional list predicates combined with AND
//! - **EntityStore**: The single mutation point; `InMemoryEntityStore` backs the server
//!
//! ## Usage
//!
//! ```
//! use entity_registry::{
//!     Address, EntityDraft, EntityFilter, EntityStore, InMemoryEntityStore, Name,
//! };
//!
//! let store = InMemoryEntityStore::new();
//! let created = store
//!     .create(
//!         EntityDraft::new()
//!             .with_name(Name::new("John", Some("Doe"), "Smith"))
//!             .with_address(Address::new("123 Main St", "Example City", "USA")),
//!     )
//!     .unwrap();
//!
//! let found = store.list(&EntityFilter::new().search("doe")).unwrap();
//! assert_eq!(found, vec![created]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod entity;
pub mod error;
pub mod filter;
pub mod seed;
pub mod storage;
pub mod time;

#[cfg(feature = "server")]
pub mod api;

// Re-export primary types at crate root for convenience
pub use config::{ConfigError, LaunchMode, ServerConfig};
pub use entity::{Address, Entity, EntityDate, EntityDraft, EntityId, Name};
pub use error::{RegistryError, RegistryResult, ValidationError};
pub use filter::EntityFilter;
pub use seed::seed_entities;
pub use storage::{EntityStore, InMemoryEntityStore, StorageError};

#[cfg(feature = "server")]
pub use api::{create_rest_router, RestApiConfig};
