//! Session wiring: registry + deck + tabletop + authority.
//!
//! `GameSession` assembles the pieces into a playable table: a hand
//! container, a configurable number of play slots, a seeded RNG for draws,
//! and the authority subscribed to the tabletop's placement events. It is
//! the single-threaded composition root; the authority lives in an
//! `Rc<RefCell<_>>` so the placement subscription and the session can share
//! it.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::warn;

use crate::cards::deck::Deck;
use crate::cards::registry::CardRegistry;
use crate::core::entity::EntityId;
use crate::core::resources::ResourcePool;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::drag::{DragOutcome, Point};
use crate::table::container::{ContainerId, ContainerKind};
use crate::table::tabletop::{DropResponse, Tabletop};

use super::authority::GameAuthority;

/// Session configuration (builder pattern).
#[derive(Clone, Debug)]
pub struct SessionConfig {
    slot_count: usize,
    starting_resources: ResourcePool,
    seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            slot_count: 4,
            starting_resources: ResourcePool::uniform(10),
            seed: 0,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of play slots on the board.
    #[must_use]
    pub fn slot_count(mut self, count: usize) -> Self {
        self.slot_count = count;
        self
    }

    /// Starting resource balances.
    #[must_use]
    pub fn starting_resources(mut self, resources: ResourcePool) -> Self {
        self.starting_resources = resources;
        self
    }

    /// Seed for the draw RNG.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A complete interactive session.
pub struct GameSession {
    registry: CardRegistry,
    deck: Deck,
    tabletop: Tabletop,
    authority: Rc<RefCell<GameAuthority>>,
    rng: GameRng,
    hand: ContainerId,
    slots: Vec<ContainerId>,
}

impl GameSession {
    /// Assemble a session from a registry, a deck, and configuration.
    #[must_use]
    pub fn new(registry: CardRegistry, deck: Deck, config: SessionConfig) -> Self {
        let mut tabletop = Tabletop::new();
        let hand = tabletop.add_container("hand", ContainerKind::Hand);
        let slots = (0..config.slot_count)
            .map(|i| tabletop.add_container(format!("slot-{i}"), ContainerKind::Slot))
            .collect();

        let authority = Rc::new(RefCell::new(GameAuthority::with_resources(
            config.starting_resources,
        )));

        // The authority reacts to every accepted drop, synchronously.
        let subscriber = Rc::clone(&authority);
        tabletop.subscribe_placements(move |event| subscriber.borrow_mut().card_played(event));

        Self {
            registry,
            deck,
            tabletop,
            authority,
            rng: GameRng::new(config.seed),
            hand,
            slots,
        }
    }

    // === Setup accessors ===

    /// The hand container.
    #[must_use]
    pub fn hand(&self) -> ContainerId {
        self.hand
    }

    /// The play slots, in board order.
    #[must_use]
    pub fn slots(&self) -> &[ContainerId] {
        &self.slots
    }

    /// The card definition catalog.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// The draw pool.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The interaction surface.
    #[must_use]
    pub fn tabletop(&self) -> &Tabletop {
        &self.tabletop
    }

    /// The interaction surface, mutably (e.g. to subscribe to placements).
    pub fn tabletop_mut(&mut self) -> &mut Tabletop {
        &mut self.tabletop
    }

    // === State reads ===

    /// Snapshot access to the game state. Keep the borrow short-lived; it
    /// must end before the next interaction call.
    #[must_use]
    pub fn state(&self) -> Ref<'_, GameState> {
        Ref::map(self.authority.borrow(), GameAuthority::state)
    }

    /// Register a state-changed listener (the presentation refresh signal).
    pub fn subscribe_state(&self, handler: impl FnMut(&GameState) + 'static) {
        self.authority.borrow_mut().subscribe(handler);
    }

    // === Draw / discard ===

    /// Draw one card: sample the deck (with replacement), spawn a bound
    /// entity into the hand, and record the draw with the authority.
    ///
    /// Returns `None` on an empty deck or a deck entry missing from the
    /// registry.
    pub fn draw_card(&mut self) -> Option<EntityId> {
        let card_id = self.deck.sample(&mut self.rng)?;
        let Some(definition) = self.registry.get(card_id) else {
            warn!("deck entry {card_id} is not in the registry");
            return None;
        };

        let entity = self.tabletop.spawn_card(definition, self.hand);
        self.authority.borrow_mut().card_drawn(entity);
        Some(entity)
    }

    /// Discard a card: remove it from the table and untrack it.
    ///
    /// Returns `false` if the card is unknown or mid-drag.
    pub fn discard_card(&mut self, entity: EntityId) -> bool {
        if self.tabletop.remove_card(entity).is_none() {
            return false;
        }
        self.authority.borrow_mut().card_discarded(entity);
        true
    }

    // === Drag gesture passthrough ===

    /// Begin dragging a card. See [`Tabletop::begin_drag`].
    pub fn begin_drag(&mut self, entity: EntityId, pointer: Point) -> bool {
        self.tabletop.begin_drag(entity, pointer)
    }

    /// Move the dragged card. See [`Tabletop::drag_to`].
    pub fn drag_to(&mut self, pointer: Point) {
        self.tabletop.drag_to(pointer);
    }

    /// Offer the dragged card to a drop target. See [`Tabletop::drop_on`].
    pub fn drop_on(&mut self, candidate: ContainerId) -> DropResponse {
        self.tabletop.drop_on(candidate)
    }

    /// Release the pointer over an optional drop candidate. See
    /// [`Tabletop::release`].
    pub fn release(&mut self, pointer: Point, candidate: Option<ContainerId>) -> Option<DragOutcome> {
        self.tabletop.release(pointer, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::{CardDefinition, CardId};
    use crate::core::resources::ResourceKind;

    fn session() -> GameSession {
        let registry = CardRegistry::from_definitions([
            CardDefinition::new(CardId::new(1), "Farm", "farm.png")
                .with_cost(ResourceKind::Wood, 2),
            CardDefinition::new(CardId::new(2), "Mine", "mine.png")
                .with_cost(ResourceKind::Gold, 1),
        ]);
        let deck = Deck::from_ids([CardId::new(1), CardId::new(2)]);
        GameSession::new(registry, deck, SessionConfig::new().slot_count(2).seed(7))
    }

    #[test]
    fn test_session_layout() {
        let session = session();
        assert_eq!(session.slots().len(), 2);
        assert_ne!(session.hand(), session.slots()[0]);
    }

    #[test]
    fn test_draw_spawns_into_hand() {
        let mut session = session();
        let card = session.draw_card().unwrap();

        assert_eq!(session.tabletop().container_of(card), Some(session.hand()));
        assert!(session.state().is_in_hand(card));
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let registry = CardRegistry::new();
        let mut session = GameSession::new(registry, Deck::new(), SessionConfig::new());
        assert!(session.draw_card().is_none());
    }

    #[test]
    fn test_draw_with_unregistered_deck_entry() {
        let registry = CardRegistry::new();
        let deck = Deck::from_ids([CardId::new(99)]);
        let mut session = GameSession::new(registry, deck, SessionConfig::new());

        assert!(session.draw_card().is_none());
        assert!(session.state().cards_in_hand().is_empty());
    }

    #[test]
    fn test_play_reaches_authority() {
        let mut session = session();
        let card = session.draw_card().unwrap();
        let slot = session.slots()[0];

        session.begin_drag(card, Point::ZERO);
        let outcome = session.release(Point::ZERO, Some(slot)).unwrap();

        assert_eq!(outcome.parent_after_drag, slot);
        let state = session.state();
        assert!(state.is_in_play(card));
        assert_eq!(state.doom_meter, 1);
    }

    #[test]
    fn test_discard_card() {
        let mut session = session();
        let card = session.draw_card().unwrap();

        assert!(session.discard_card(card));
        assert!(!session.discard_card(card));
        assert!(session.state().cards_in_hand().is_empty());
    }

    #[test]
    fn test_same_seed_draws_same_sequence() {
        let draws = |seed: u64| {
            let registry = CardRegistry::from_definitions([
                CardDefinition::new(CardId::new(1), "Farm", "farm.png"),
                CardDefinition::new(CardId::new(2), "Mine", "mine.png"),
            ]);
            let deck = Deck::from_ids([CardId::new(1), CardId::new(2)]);
            let mut session =
                GameSession::new(registry, deck, SessionConfig::new().seed(seed));
            (0..10)
                .map(|_| {
                    let card = session.draw_card().unwrap();
                    session.tabletop().entity(card).unwrap().definition().unwrap().id
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(draws(3), draws(3));
    }
}
