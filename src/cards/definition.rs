//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template: what
//! it costs, what it produces, how long it takes to build, and how hard it
//! hits. A definition is created once at load time and never mutated; many
//! live entities share one definition through an `Arc`.
//!
//! Instance-specific data (position, container, drag state) lives in
//! `CardEntity`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::resources::{ResourceAmount, ResourceKind};

/// Short resource sequences stay inline; two entries covers most cards.
pub type ResourceList = SmallVec<[ResourceAmount; 2]>;

/// Unique identifier for a card definition.
///
/// This identifies the template (e.g. "Lumber Mill"), not a specific card on
/// the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// Read-only for the lifetime of the process once registered.
///
/// ## Example
///
/// ```
/// use doomtable::cards::{CardDefinition, CardId};
/// use doomtable::core::ResourceKind;
///
/// let mill = CardDefinition::new(CardId::new(1), "Lumber Mill", "mill.png")
///     .with_cost(ResourceKind::Gold, 2)
///     .with_production(ResourceKind::Wood, 1)
///     .with_build_time(3);
///
/// assert_eq!(mill.first_cost().unwrap().value, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Reference to the card art, resolved by the asset layer.
    pub image: String,

    /// Rules/flavor text shown on the card face.
    pub description: String,

    /// Resources deducted when the card is played, in display order.
    pub cost: ResourceList,

    /// Resources the card yields once built, in display order.
    pub production: ResourceList,

    /// Turns until the card's production comes online.
    pub build_time: u32,

    /// Damage dealt by the card, if any.
    pub damage: u32,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            description: String::new(),
            cost: ResourceList::new(),
            production: ResourceList::new(),
            build_time: 0,
            damage: 0,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a cost entry (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, kind: ResourceKind, value: u32) -> Self {
        self.cost.push(ResourceAmount::new(kind, value));
        self
    }

    /// Append a production entry (builder pattern).
    #[must_use]
    pub fn with_production(mut self, kind: ResourceKind, value: u32) -> Self {
        self.production.push(ResourceAmount::new(kind, value));
        self
    }

    /// Set the build time (builder pattern).
    #[must_use]
    pub fn with_build_time(mut self, turns: u32) -> Self {
        self.build_time = turns;
        self
    }

    /// Set the damage (builder pattern).
    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// The first cost entry, the one the card face displays.
    #[must_use]
    pub fn first_cost(&self) -> Option<&ResourceAmount> {
        self.cost.first()
    }

    /// The first production entry, the one the card face displays.
    #[must_use]
    pub fn first_production(&self) -> Option<&ResourceAmount> {
        self.production.first()
    }
}
