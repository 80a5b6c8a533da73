//! Entity layer modules.
//!
//! This module groups the entity record, its identifier and its nested records.

#[allow(clippy::module_inception)]
pub mod entity;
pub mod record;

pub use entity::{Entity, EntityDraft, EntityId};
pub use record::{Address, EntityDate, Name};
