//! The game authority: sole writer of `GameState`.
//!
//! Every gameplay consequence funnels through here. The tabletop handles
//! interaction mechanics and publishes placement events; the authority
//! applies their consequences (category transfer, doom counter, resource
//! deduction) and notifies state listeners. No other component writes
//! `GameState`, and the authority never hands out a mutable reference.

use log::{debug, warn};

use crate::core::entity::EntityId;
use crate::core::resources::ResourcePool;
use crate::core::state::GameState;
use crate::events::{CardPlayed, EventBus};

/// Applies gameplay consequences and notifies state listeners.
///
/// Listeners receive `&GameState` after every mutation, the refresh signal
/// for presentation layers. Handlers must not call back into the session
/// that owns the authority; they run while it is mutably borrowed.
#[derive(Debug, Default)]
pub struct GameAuthority {
    state: GameState,
    changed: EventBus<GameState>,
}

impl GameAuthority {
    /// Create an authority over an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authority with starting resource balances.
    #[must_use]
    pub fn with_resources(resources: ResourcePool) -> Self {
        Self {
            state: GameState::with_resources(resources),
            changed: EventBus::new(),
        }
    }

    /// Read the current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Register a state-changed listener.
    pub fn subscribe(&mut self, handler: impl FnMut(&GameState) + 'static) {
        self.changed.subscribe(handler);
    }

    /// A card was drawn: track it in the hand category.
    pub fn card_drawn(&mut self, entity: EntityId) {
        if !self.state.mark_in_hand(entity) {
            warn!("ignoring draw of {entity}: already tracked");
            return;
        }
        self.changed.publish(&self.state);
    }

    /// A slot accepted a card: apply the play's consequences.
    ///
    /// Moves the entity from the hand category to the play category, bumps
    /// the doom meter, and deducts the full cost sequence. Deduction is
    /// unconditional; there is no affordability gate, and balances may go
    /// negative (logged when they do). An entity that was not tracked in the
    /// hand is ignored entirely so the category partition stays intact.
    pub fn card_played(&mut self, event: &CardPlayed) {
        if !self.state.mark_in_play(event.entity) {
            warn!(
                "ignoring play of {}: not tracked in hand (origin {})",
                event.entity, event.origin
            );
            return;
        }

        self.state.doom_meter += 1;

        for amount in &event.definition.cost {
            let balance = self
                .state
                .resources
                .modify(amount.kind, -i64::from(amount.value));
            if balance < 0 {
                warn!(
                    "{} balance went negative ({balance}) playing {}",
                    amount.kind, event.definition.name
                );
            }
        }

        self.changed.publish(&self.state);
    }

    /// A card left the table (discard/consume): stop tracking it.
    pub fn card_discarded(&mut self, entity: EntityId) {
        if !self.state.untrack(entity) {
            debug!("discard of {entity} ignored: not tracked");
            return;
        }
        self.changed.publish(&self.state);
    }
}
