//! The tabletop: containers, live entities, and the drop protocol.
//!
//! `Tabletop` is the interaction surface the input provider talks to. It
//! owns the container membership, the live card entities, and the drag
//! controller, and it publishes `CardPlayed` when a slot accepts a drop.
//!
//! The tabletop mutates no game state. Resources, the doom meter, and the
//! hand/play category sets belong to the game authority, which subscribes to
//! the placement events published here.
//!
//! ## Gesture flow
//!
//! ```text
//! begin_drag -> drag_to* -> [drop_on] -> end_drag
//! ```
//!
//! `drop_on` runs before `end_drag` for the same gesture, so placement
//! subscribers observe pre-transfer container state: at publish time the
//! dragged card is still a member of its origin container. `release`
//! packages the drop-then-finish sequence in that order.

use std::sync::Arc;

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use crate::cards::definition::CardDefinition;
use crate::cards::entity::CardEntity;
use crate::core::entity::EntityId;
use crate::drag::{DragController, DragOutcome, DragPhase, Point};
use crate::events::{CardPlayed, EventBus};

use super::container::{ContainerConfig, ContainerId, ContainerKind};
use super::manager::ContainerManager;

/// How a drop attempt resolved. Rejections are silent toward the player
/// (the card springs back on release), but callers get the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropResponse {
    /// The slot accepted the card; it will reparent here on release.
    Claimed,
    /// The slot is occupied (or the card was not droppable); the card
    /// springs back to its drag origin on release.
    Rejected,
    /// The target container exists but does not accept drops.
    NotASlot,
    /// The target container is not on this tabletop.
    UnknownTarget,
    /// No claimable drag gesture is in progress.
    NoGesture,
}

/// The interactive card table.
#[derive(Default)]
pub struct Tabletop {
    containers: ContainerManager,
    entities: FxHashMap<EntityId, CardEntity>,
    drag: DragController,
    placements: EventBus<CardPlayed>,
    next_container: u16,
    next_entity: u32,
}

impl std::fmt::Debug for Tabletop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabletop")
            .field("containers", &self.containers)
            .field("entities", &self.entities.len())
            .field("drag", &self.drag)
            .field("placements", &self.placements)
            .finish()
    }
}

impl Tabletop {
    /// Create an empty tabletop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Setup ===

    /// Declare a container and get its ID.
    pub fn add_container(&mut self, name: impl Into<String>, kind: ContainerKind) -> ContainerId {
        let id = ContainerId::new(self.next_container);
        self.next_container += 1;
        self.containers
            .add_container(ContainerConfig::new(id, name, kind));
        id
    }

    /// Spawn a card bound to `definition` into a container.
    ///
    /// Allocates the entity ID and performs the one-time bind. Panics if the
    /// container is unknown (a setup error).
    pub fn spawn_card(
        &mut self,
        definition: Arc<CardDefinition>,
        container: ContainerId,
    ) -> EntityId {
        let id = EntityId::new(self.next_entity);
        self.next_entity += 1;

        let mut card = CardEntity::new(id);
        card.bind(definition);
        self.entities.insert(id, card);
        self.containers.insert(id, container);
        id
    }

    /// Remove a card from the table entirely (discard/consume).
    ///
    /// Refused while the card is mid-drag. Returns the removed entity.
    pub fn remove_card(&mut self, entity: EntityId) -> Option<CardEntity> {
        if self.drag.entity() == Some(entity) {
            warn!("refusing to remove {entity}: it is being dragged");
            return None;
        }
        self.containers.remove(entity)?;
        self.entities.remove(&entity)
    }

    /// Subscribe to `CardPlayed` placement events.
    pub fn subscribe_placements(&mut self, handler: impl FnMut(&CardPlayed) + 'static) {
        self.placements.subscribe(handler);
    }

    // === Reads ===

    /// A live entity by ID.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&CardEntity> {
        self.entities.get(&id)
    }

    /// The container a card currently belongs to.
    #[must_use]
    pub fn container_of(&self, entity: EntityId) -> Option<ContainerId> {
        self.containers.container_of(entity)
    }

    /// Members of a container, in insertion order.
    #[must_use]
    pub fn cards_in(&self, container: ContainerId) -> &[EntityId] {
        self.containers.cards_in(container)
    }

    /// Container membership and configuration.
    #[must_use]
    pub fn containers(&self) -> &ContainerManager {
        &self.containers
    }

    /// Current drag phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// The entity being dragged, if any.
    #[must_use]
    pub fn dragging_entity(&self) -> Option<EntityId> {
        self.drag.entity()
    }

    // === Drag protocol ===

    /// Begin dragging a card.
    ///
    /// Records the card's current container as its drag origin, lifts it
    /// above its siblings, and disables it as a raycast target so it cannot
    /// intercept its own release. Purely visual/structural; no game-state
    /// mutation. Returns `false` if the entity is unknown, unbound, or a
    /// gesture is already in progress.
    pub fn begin_drag(&mut self, entity: EntityId, pointer: Point) -> bool {
        let Some(card) = self.entities.get(&entity) else {
            warn!("cannot drag unknown entity {entity}");
            return false;
        };
        if !card.is_bound() {
            warn!("cannot drag {entity}: no definition bound");
            return false;
        }
        let Some(origin) = self.containers.container_of(entity) else {
            warn!("cannot drag {entity}: not in any container");
            return false;
        };

        if !self.drag.begin(entity, origin, pointer) {
            return false;
        }

        let card = self.entities.get_mut(&entity).expect("checked above");
        card.lifted = true;
        card.hit_enabled = false;
        debug!("drag of {entity} began from {origin}");
        true
    }

    /// Move the dragged card to the pointer position.
    ///
    /// No ownership or container change occurs during this phase. A no-op
    /// when nothing is being dragged.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(position) = self.drag.update(pointer) else {
            return;
        };
        if let Some(entity) = self.drag.entity() {
            if let Some(card) = self.entities.get_mut(&entity) {
                card.position = position;
            }
        }
    }

    /// Offer the dragged card to a drop target.
    ///
    /// Accepted only when the target is a slot with no current occupant. On
    /// acceptance the gesture's parent-after-drag becomes the slot and a
    /// `CardPlayed` event is published synchronously, before release
    /// finalization, so subscribers see the card still in its origin
    /// container. An occupied slot rejects the drop and the gesture is left
    /// unchanged.
    pub fn drop_on(&mut self, candidate: ContainerId) -> DropResponse {
        if self.drag.phase() != DragPhase::Dragging {
            debug!("drop on {candidate} ignored: no claimable gesture");
            return DropResponse::NoGesture;
        }
        let entity = self.drag.entity().expect("gesture in progress");
        let origin = self.drag.origin().expect("gesture in progress");

        let Some(config) = self.containers.config(candidate) else {
            warn!("drop on unknown container {candidate}");
            return DropResponse::UnknownTarget;
        };
        if !config.kind.accepts_drops() {
            return DropResponse::NotASlot;
        }
        if self.containers.count(candidate) > 0 {
            debug!("drop of {entity} on {candidate} rejected: occupied");
            return DropResponse::Rejected;
        }

        let Some(definition) = self.entities.get(&entity).and_then(|c| c.definition()).cloned()
        else {
            warn!("drop of {entity} rejected: no definition bound");
            return DropResponse::Rejected;
        };

        self.drag.claim(candidate);
        info!("{} played to {candidate}", definition.name);
        self.placements.publish(&CardPlayed {
            entity,
            definition,
            slot: candidate,
            origin,
        });
        DropResponse::Claimed
    }

    /// Finish the gesture: reparent the card and restore its interactivity.
    ///
    /// The card transfers atomically to the claiming slot, or back to its
    /// drag origin when no target claimed it. A spurious end without a
    /// matching begin is a no-op.
    pub fn end_drag(&mut self, pointer: Point) -> Option<DragOutcome> {
        let outcome = self.drag.finish()?;

        self.containers
            .transfer(outcome.entity, outcome.parent_after_drag);

        if let Some(card) = self.entities.get_mut(&outcome.entity) {
            card.lifted = false;
            card.hit_enabled = true;
            card.position = pointer;
        }
        debug!(
            "drag of {} ended in {}",
            outcome.entity, outcome.parent_after_drag
        );
        Some(outcome)
    }

    /// Release the pointer: resolve the drop candidate, then finish.
    ///
    /// Drop-target resolution always happens before release finalization,
    /// matching how the gesture resolves in one input callback.
    pub fn release(&mut self, pointer: Point, candidate: Option<ContainerId>) -> Option<DragOutcome> {
        if let Some(target) = candidate {
            self.drop_on(target);
        }
        self.end_drag(pointer)
    }
}
