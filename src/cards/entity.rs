//! Card entities - live, placeable card instances.
//!
//! A `CardEntity` is one card on the table: a shared reference to its
//! immutable `CardDefinition` plus the visual state the drag layer works
//! with. Entities are created when a card is drawn and dropped when the card
//! is discarded or consumed; a definition is bound exactly once per entity.
//!
//! Which container an entity belongs to is tracked by the
//! `ContainerManager`, not here; one structure owns membership so a card
//! can never be in two places.

use std::sync::Arc;

use log::warn;

use crate::core::entity::EntityId;
use crate::core::resources::ResourceAmount;
use crate::drag::Point;

use super::definition::CardDefinition;

/// A live card on the table.
///
/// The card face displays only the first cost and production amounts;
/// rendering multiple amounts per card is future work.
#[derive(Clone, Debug)]
pub struct CardEntity {
    /// Unique entity ID for this card.
    pub entity_id: EntityId,

    /// Current screen position, driven by the drag layer.
    pub position: Point,

    /// Rendered above its siblings while a drag is in progress.
    pub lifted: bool,

    /// Whether the entity can be hit by pointer raycasts. Disabled during
    /// its own drag so it cannot intercept its own release.
    pub hit_enabled: bool,

    definition: Option<Arc<CardDefinition>>,
}

impl CardEntity {
    /// Create an unbound entity. Call `bind` before putting it in play.
    #[must_use]
    pub fn new(entity_id: EntityId) -> Self {
        Self {
            entity_id,
            position: Point::ZERO,
            lifted: false,
            hit_enabled: true,
            definition: None,
        }
    }

    /// Bind this entity to its definition. One-time initialization.
    ///
    /// Rebinding is not supported: a second call logs a warning and leaves
    /// the original binding untouched. Construct a new entity per draw.
    pub fn bind(&mut self, definition: Arc<CardDefinition>) {
        if let Some(existing) = &self.definition {
            warn!(
                "ignoring rebind of {} (already bound to {})",
                self.entity_id, existing.id
            );
            return;
        }
        self.definition = Some(definition);
    }

    /// Whether `bind` has run.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.definition.is_some()
    }

    /// The bound definition, if any.
    #[must_use]
    pub fn definition(&self) -> Option<&Arc<CardDefinition>> {
        self.definition.as_ref()
    }

    /// The cost amount the card face displays (index 0 of the sequence).
    #[must_use]
    pub fn display_cost(&self) -> Option<&ResourceAmount> {
        self.definition.as_ref()?.first_cost()
    }

    /// The production amount the card face displays (index 0 of the sequence).
    #[must_use]
    pub fn display_production(&self) -> Option<&ResourceAmount> {
        self.definition.as_ref()?.first_production()
    }
}
