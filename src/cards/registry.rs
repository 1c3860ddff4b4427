//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card definition for a session, built once
//! from static configuration at startup. Definitions are handed out as
//! `Arc<CardDefinition>`: shared immutable references that any number of
//! live entities can hold without owning the definition.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use doomtable::cards::{CardRegistry, CardDefinition, CardId};
/// use doomtable::core::ResourceKind;
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new(CardId::new(1), "Lumber Mill", "mill.png")
///         .with_cost(ResourceKind::Gold, 2),
/// );
///
/// let mill = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(mill.name, "Lumber Mill");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a definition list (e.g. deserialized config).
    ///
    /// Panics if the list contains duplicate IDs.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = CardDefinition>) -> Self {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, Arc::new(card));
    }

    /// Get a shared handle to a card definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Arc<CardDefinition>> {
        self.cards.get(&id).cloned()
    }

    /// Get a card definition, panicking if not found.
    ///
    /// Use when you're certain the card exists.
    #[must_use]
    pub fn get_unchecked(&self, id: CardId) -> Arc<CardDefinition> {
        self.get(id).expect("Card not found in registry")
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// All registered card IDs, e.g. for building a deck over the full set.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::ResourceKind;

    fn mill() -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Lumber Mill", "mill.png")
            .with_cost(ResourceKind::Gold, 2)
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(mill());

        let found = registry.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Lumber Mill");

        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_shared_handles_point_at_one_definition() {
        let mut registry = CardRegistry::new();
        registry.register(mill());

        let a = registry.get(CardId::new(1)).unwrap();
        let b = registry.get(CardId::new(1)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(mill());
        registry.register(mill()); // Should panic
    }

    #[test]
    fn test_from_definitions() {
        let registry = CardRegistry::from_definitions([
            CardDefinition::new(CardId::new(1), "A", "a.png"),
            CardDefinition::new(CardId::new(2), "B", "b.png"),
        ]);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(CardId::new(1)));
        assert!(registry.contains(CardId::new(2)));
    }

    #[test]
    fn test_iteration() {
        let registry = CardRegistry::from_definitions([
            CardDefinition::new(CardId::new(1), "A", "a.png"),
            CardDefinition::new(CardId::new(2), "B", "b.png"),
        ]);

        let mut ids: Vec<_> = registry.ids().collect();
        ids.sort_by_key(|id| id.raw());
        assert_eq!(ids, vec![CardId::new(1), CardId::new(2)]);

        assert_eq!(registry.iter().count(), 2);
    }
}
