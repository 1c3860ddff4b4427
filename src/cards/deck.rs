//! Deck: the pool of card definitions available to draw.
//!
//! The deck is an ordered list of `CardId`s supplied by configuration. Draws
//! sample uniformly at random **with replacement**: the deck never depletes,
//! and the same card can be drawn any number of times.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

use super::definition::CardId;

/// The in-deck pool of card IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from an ordered ID sequence.
    #[must_use]
    pub fn from_ids(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Add a card ID to the pool.
    pub fn push(&mut self, id: CardId) {
        self.cards.push(id);
    }

    /// Number of entries in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The pool contents, in configuration order.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Sample one card ID uniformly at random, with replacement.
    ///
    /// Returns `None` only for an empty deck.
    #[must_use]
    pub fn sample(&self, rng: &mut GameRng) -> Option<CardId> {
        rng.choose(&self.cards).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck_samples_none() {
        let deck = Deck::new();
        let mut rng = GameRng::new(42);
        assert_eq!(deck.sample(&mut rng), None);
    }

    #[test]
    fn test_sample_draws_from_pool() {
        let deck = Deck::from_ids([CardId::new(1), CardId::new(2)]);
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let drawn = deck.sample(&mut rng).unwrap();
            assert!(deck.cards().contains(&drawn));
        }
    }

    #[test]
    fn test_sampling_never_depletes() {
        let deck = Deck::from_ids([CardId::new(7)]);
        let mut rng = GameRng::new(42);

        // Far more draws than entries: always succeeds
        for _ in 0..100 {
            assert_eq!(deck.sample(&mut rng), Some(CardId::new(7)));
        }
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_sampling_is_deterministic_per_seed() {
        let deck = Deck::from_ids((0..10).map(CardId::new));

        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);
        let seq1: Vec<_> = (0..20).map(|_| deck.sample(&mut rng1)).collect();
        let seq2: Vec<_> = (0..20).map(|_| deck.sample(&mut rng2)).collect();

        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_deck_serialization() {
        let deck = Deck::from_ids([CardId::new(1), CardId::new(2), CardId::new(1)]);
        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
