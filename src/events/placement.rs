//! Placement events.
//!
//! `CardPlayed` is raised by the tabletop when a slot accepts a dropped
//! card, before release finalization transfers membership, so subscribers see
//! pre-transfer container state. The event carries everything a handler
//! needs, so handlers never have to reach back into the tabletop.

use std::sync::Arc;

use crate::cards::definition::CardDefinition;
use crate::core::entity::EntityId;
use crate::table::container::ContainerId;

/// A slot accepted a dropped card.
#[derive(Clone, Debug)]
pub struct CardPlayed {
    /// The card that was played.
    pub entity: EntityId,

    /// The played card's definition (cost, production, metadata).
    pub definition: Arc<CardDefinition>,

    /// The slot that accepted the drop.
    pub slot: ContainerId,

    /// The container the drag started from. At the time handlers run, the
    /// entity is still a member of this container.
    pub origin: ContainerId,
}
