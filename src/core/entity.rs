//! Entity identification.
//!
//! Every live card on the table has a unique `EntityId`, allocated by the
//! tabletop when the card is spawned. Identifiers are never reused within a
//! session.

use serde::{Deserialize, Serialize};

/// Unique identifier for a live card entity.
///
/// Identifies a specific card on the table, not a card definition:
/// two copies of the same card drawn separately get distinct `EntityId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
