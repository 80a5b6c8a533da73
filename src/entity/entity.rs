//! Entity types and identity management.
//!
//! An `Entity` is a person record: names, addresses, dated events and two
//! scalar attributes. Its `EntityId` is assigned by the store and never
//! changes afterwards; callers describe the rest of the record with an
//! `EntityDraft`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::{Address, EntityDate, Name};

/// Unique, stable entity identifier.
///
/// Identifiers are opaque strings. Fresh ones are the hyphenated text of a
/// random v4 UUID; externally seeded records may carry any non-empty string.
///
/// # Examples
///
/// ```
/// use entity_registry::EntityId;
///
/// let id = EntityId::generate();
/// assert!(!id.is_empty());
/// assert_ne!(id, EntityId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new random entity ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A stored person record.
///
/// `names`, `addresses` and `dates` distinguish "absent" (`None`) from
/// "empty" (`Some(vec![])`): list filters treat the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Store-assigned identifier.
    pub id: EntityId,
    /// Ordered name records.
    #[serde(default)]
    pub names: Option<Vec<Name>>,
    /// Ordered address records.
    #[serde(default)]
    pub addresses: Option<Vec<Address>>,
    /// Ordered dated events (birth, death, ...).
    #[serde(default)]
    pub dates: Option<Vec<EntityDate>>,
    /// Whether the person is deceased.
    #[serde(default)]
    pub deceased: bool,
    /// Free-text gender.
    #[serde(default)]
    pub gender: Option<String>,
}

impl Entity {
    /// Builds a record from a draft under the given identifier.
    #[must_use]
    pub fn from_draft(id: EntityId, draft: EntityDraft) -> Self {
        Self {
            id,
            names: draft.names,
            addresses: draft.addresses,
            dates: draft.dates,
            deceased: draft.deceased,
            gender: draft.gender,
        }
    }

    /// Replaces every field except `id` with the draft's values.
    pub fn apply(&mut self, draft: EntityDraft) {
        self.names = draft.names;
        self.addresses = draft.addresses;
        self.dates = draft.dates;
        self.deceased = draft.deceased;
        self.gender = draft.gender;
    }
}

/// Caller-supplied entity contents: every field except `id`.
///
/// Request bodies deserialize into this type, so an `id` key sent by a client
/// is silently dropped.
///
/// # Examples
///
/// ```
/// use entity_registry::{Address, EntityDraft, Name};
///
/// let draft = EntityDraft::new()
///     .with_name(Name::new("Ada", None::<String>, "Lovelace"))
///     .with_address(Address::new("12 St James's Sq", "London", "UK"))
///     .with_gender("Female");
/// assert_eq!(draft.names.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDraft {
    /// Ordered name records.
    #[serde(default)]
    pub names: Option<Vec<Name>>,
    /// Ordered address records.
    #[serde(default)]
    pub addresses: Option<Vec<Address>>,
    /// Ordered dated events.
    #[serde(default)]
    pub dates: Option<Vec<EntityDate>>,
    /// Whether the person is deceased.
    #[serde(default)]
    pub deceased: bool,
    /// Free-text gender.
    #[serde(default)]
    pub gender: Option<String>,
}

impl EntityDraft {
    /// Creates an empty draft (all sequences absent, not deceased).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a name, creating the sequence if absent.
    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.names.get_or_insert_with(Vec::new).push(name);
        self
    }

    /// Appends an address, creating the sequence if absent.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.get_or_insert_with(Vec::new).push(address);
        self
    }

    /// Appends a dated event, creating the sequence if absent.
    #[must_use]
    pub fn with_date(mut self, date: EntityDate) -> Self {
        self.dates.get_or_insert_with(Vec::new).push(date);
        self
    }

    /// Sets the deceased flag.
    #[must_use]
    pub fn with_deceased(mut self, deceased: bool) -> Self {
        self.deceased = deceased;
        self
    }

    /// Sets the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}

impl From<Entity> for EntityDraft {
    fn from(entity: Entity) -> Self {
        Self {
            names: entity.names,
            addresses: entity.addresses,
            dates: entity.dates,
            deceased: entity.deceased,
            gender: entity.gender,
        }
    }
}
