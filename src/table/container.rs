//! Container identity and configuration.
//!
//! A container holds zero or more card entities. The hand is unbounded; a
//! slot is a play-area cell that holds at most one card and participates in
//! the drop protocol.

use serde::{Deserialize, Serialize};

/// Container identifier, allocated by the tabletop at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u16);

impl ContainerId {
    /// Create a new container ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container({})", self.0)
    }
}

/// What kind of container this is, which fixes its occupancy rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// The hand area: unbounded, not a drop target.
    Hand,
    /// A play slot: holds at most one card, accepts drops when empty.
    Slot,
}

impl ContainerKind {
    /// Maximum number of cards this kind may hold. `None` for unlimited.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Hand => None,
            Self::Slot => Some(1),
        }
    }

    /// Whether containers of this kind implement the drop protocol.
    #[must_use]
    pub const fn accepts_drops(self) -> bool {
        matches!(self, Self::Slot)
    }
}

/// Configuration for a single container.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Unique identifier for this container.
    pub id: ContainerId,

    /// Human-readable name (for debugging/display).
    pub name: String,

    /// Kind, which fixes capacity and drop behavior.
    pub kind: ContainerKind,
}

impl ContainerConfig {
    /// Create a new container configuration.
    pub fn new(id: ContainerId, name: impl Into<String>, kind: ContainerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}
