//! Game state: the single source of truth for gameplay consequences.
//!
//! One `GameState` exists per session. It is owned by the game authority,
//! which is the only component that ever holds it mutably; everything else
//! reads it through `&GameState` (typically from a state-changed
//! notification).
//!
//! ## Category sets
//!
//! `cards_in_hand` and `cards_in_play` partition the live card entities: an
//! entity is in exactly one of them, or in neither once discarded. The set
//! mutators preserve that partition: `mark_in_play` refuses entities that
//! are not currently tracked in the hand.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::resources::ResourcePool;

/// Complete per-session game state.
///
/// Uses `im` persistent sets so listeners can clone snapshots cheaply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Resource balances. May go negative; deduction is unconditional.
    pub resources: ResourcePool,

    /// Incremented by one on every successful card play.
    pub doom_meter: u32,

    cards_in_hand: ImHashSet<EntityId>,
    cards_in_play: ImHashSet<EntityId>,
}

impl GameState {
    /// Create an empty state (zero balances, zero doom, no cards).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with starting resource balances.
    #[must_use]
    pub fn with_resources(resources: ResourcePool) -> Self {
        Self {
            resources,
            ..Self::default()
        }
    }

    // === Category sets ===

    /// Entities currently tracked as in-hand.
    #[must_use]
    pub fn cards_in_hand(&self) -> &ImHashSet<EntityId> {
        &self.cards_in_hand
    }

    /// Entities currently tracked as in-play.
    #[must_use]
    pub fn cards_in_play(&self) -> &ImHashSet<EntityId> {
        &self.cards_in_play
    }

    /// Check whether an entity is tracked as in-hand.
    #[must_use]
    pub fn is_in_hand(&self, entity: EntityId) -> bool {
        self.cards_in_hand.contains(&entity)
    }

    /// Check whether an entity is tracked as in-play.
    #[must_use]
    pub fn is_in_play(&self, entity: EntityId) -> bool {
        self.cards_in_play.contains(&entity)
    }

    /// Track a freshly drawn entity as in-hand.
    ///
    /// Returns `false` (and changes nothing) if the entity is already
    /// tracked in either category.
    pub fn mark_in_hand(&mut self, entity: EntityId) -> bool {
        if self.cards_in_hand.contains(&entity) || self.cards_in_play.contains(&entity) {
            return false;
        }
        self.cards_in_hand.insert(entity);
        true
    }

    /// Move an entity from the hand category to the play category.
    ///
    /// Returns `false` (and changes nothing) if the entity is not currently
    /// tracked in the hand, so the hand/play partition cannot be corrupted.
    pub fn mark_in_play(&mut self, entity: EntityId) -> bool {
        if self.cards_in_hand.remove(&entity).is_none() {
            return false;
        }
        self.cards_in_play.insert(entity);
        true
    }

    /// Stop tracking an entity entirely (discard/consume).
    ///
    /// Returns `false` if the entity was not tracked in either category.
    pub fn untrack(&mut self, entity: EntityId) -> bool {
        self.cards_in_hand.remove(&entity).is_some()
            || self.cards_in_play.remove(&entity).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::ResourceKind;

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new();
        assert_eq!(state.doom_meter, 0);
        assert!(state.cards_in_hand().is_empty());
        assert!(state.cards_in_play().is_empty());
    }

    #[test]
    fn test_mark_in_hand() {
        let mut state = GameState::new();

        assert!(state.mark_in_hand(EntityId(1)));
        assert!(state.is_in_hand(EntityId(1)));

        // Already tracked: refused
        assert!(!state.mark_in_hand(EntityId(1)));
    }

    #[test]
    fn test_mark_in_play_moves_category() {
        let mut state = GameState::new();
        state.mark_in_hand(EntityId(1));

        assert!(state.mark_in_play(EntityId(1)));
        assert!(!state.is_in_hand(EntityId(1)));
        assert!(state.is_in_play(EntityId(1)));
    }

    #[test]
    fn test_mark_in_play_requires_hand() {
        let mut state = GameState::new();

        // Never drawn: refused, nothing tracked
        assert!(!state.mark_in_play(EntityId(9)));
        assert!(!state.is_in_play(EntityId(9)));

        // Already in play: refused (partition preserved)
        state.mark_in_hand(EntityId(1));
        state.mark_in_play(EntityId(1));
        assert!(!state.mark_in_play(EntityId(1)));
        assert!(state.is_in_play(EntityId(1)));
    }

    #[test]
    fn test_untrack() {
        let mut state = GameState::new();
        state.mark_in_hand(EntityId(1));
        state.mark_in_hand(EntityId(2));
        state.mark_in_play(EntityId(2));

        assert!(state.untrack(EntityId(1)));
        assert!(state.untrack(EntityId(2)));
        assert!(!state.untrack(EntityId(3)));

        assert!(state.cards_in_hand().is_empty());
        assert!(state.cards_in_play().is_empty());
    }

    #[test]
    fn test_with_resources() {
        let mut pool = ResourcePool::new();
        pool.set(ResourceKind::Wood, 10);

        let state = GameState::with_resources(pool);
        assert_eq!(state.resources.get(ResourceKind::Wood), 10);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = GameState::new();
        state.mark_in_hand(EntityId(1));

        let snapshot = state.clone();
        state.mark_in_play(EntityId(1));

        assert!(snapshot.is_in_hand(EntityId(1)));
        assert!(state.is_in_play(EntityId(1)));
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new();
        state.resources.set(ResourceKind::Gold, -2);
        state.mark_in_hand(EntityId(5));
        state.doom_meter = 3;

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.doom_meter, 3);
        assert_eq!(deserialized.resources.get(ResourceKind::Gold), -2);
        assert!(deserialized.is_in_hand(EntityId(5)));
    }
}
