//! Container membership tracking and atomic transfer.
//!
//! The `ContainerManager` is the one structure that knows which container
//! each entity belongs to: an entity→container location map plus an ordered
//! member list per container, always updated together. Because membership
//! lives in a single place, an entity can never belong to two containers or
//! to none; `transfer` moves it in one step.

use log::error;
use rustc_hash::FxHashMap;

use crate::core::entity::EntityId;

use super::container::{ContainerConfig, ContainerId};

/// Tracks entity membership across containers.
///
/// ## Usage
///
/// ```
/// use doomtable::table::{ContainerConfig, ContainerId, ContainerKind, ContainerManager};
/// use doomtable::core::EntityId;
///
/// let mut manager = ContainerManager::new();
/// let hand = ContainerId::new(0);
/// let slot = ContainerId::new(1);
/// manager.add_container(ContainerConfig::new(hand, "hand", ContainerKind::Hand));
/// manager.add_container(ContainerConfig::new(slot, "slot-0", ContainerKind::Slot));
///
/// manager.insert(EntityId(10), hand);
/// manager.transfer(EntityId(10), slot);
/// assert_eq!(manager.container_of(EntityId(10)), Some(slot));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContainerManager {
    configs: FxHashMap<ContainerId, ContainerConfig>,
    locations: FxHashMap<EntityId, ContainerId>,
    members: FxHashMap<ContainerId, Vec<EntityId>>,
}

impl ContainerManager {
    /// Create a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a container.
    ///
    /// Panics if a container with the same ID already exists.
    pub fn add_container(&mut self, config: ContainerConfig) {
        if self.configs.contains_key(&config.id) {
            panic!("Container {:?} already declared", config.id);
        }
        self.members.insert(config.id, Vec::new());
        self.configs.insert(config.id, config);
    }

    /// Get a container's configuration.
    #[must_use]
    pub fn config(&self, container: ContainerId) -> Option<&ContainerConfig> {
        self.configs.get(&container)
    }

    /// Iterate over all declared containers.
    pub fn containers(&self) -> impl Iterator<Item = &ContainerConfig> {
        self.configs.values()
    }

    /// Put a new entity into a container.
    ///
    /// Panics if the entity is already tracked or the container is unknown;
    /// both are setup errors, not gameplay conditions.
    pub fn insert(&mut self, entity: EntityId, container: ContainerId) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {entity} already tracked by container manager");
        }
        let members = self
            .members
            .get_mut(&container)
            .unwrap_or_else(|| panic!("Unknown container {container}"));
        members.push(entity);
        self.locations.insert(entity, container);
    }

    /// Move an entity to another container, atomically.
    ///
    /// Returns the previous container on success. Returns `None` without
    /// moving anything when the entity is untracked, the target is unknown,
    /// or the target is at capacity; the entity then simply stays where it
    /// is.
    pub fn transfer(&mut self, entity: EntityId, to: ContainerId) -> Option<ContainerId> {
        let from = self.locations.get(&entity).copied()?;
        if from == to {
            return Some(from);
        }

        let Some(config) = self.configs.get(&to) else {
            error!("refusing transfer of {entity}: unknown container {to}");
            return None;
        };
        if let Some(capacity) = config.kind.capacity() {
            if self.members[&to].len() >= capacity {
                error!("refusing transfer of {entity}: {to} is at capacity");
                return None;
            }
        }

        if let Some(members) = self.members.get_mut(&from) {
            members.retain(|&e| e != entity);
        }
        self.members.get_mut(&to).expect("checked above").push(entity);
        self.locations.insert(entity, to);

        Some(from)
    }

    /// Stop tracking an entity (discard/consume).
    ///
    /// Returns the container it was in, or `None` if untracked.
    pub fn remove(&mut self, entity: EntityId) -> Option<ContainerId> {
        let container = self.locations.remove(&entity)?;
        if let Some(members) = self.members.get_mut(&container) {
            members.retain(|&e| e != entity);
        }
        Some(container)
    }

    /// The container an entity currently belongs to.
    #[must_use]
    pub fn container_of(&self, entity: EntityId) -> Option<ContainerId> {
        self.locations.get(&entity).copied()
    }

    /// The members of a container, in insertion order.
    #[must_use]
    pub fn cards_in(&self, container: ContainerId) -> &[EntityId] {
        self.members.get(&container).map_or(&[], |v| v.as_slice())
    }

    /// Number of cards in a container.
    #[must_use]
    pub fn count(&self, container: ContainerId) -> usize {
        self.cards_in(container).len()
    }

    /// Whether a container is at its capacity limit.
    #[must_use]
    pub fn is_full(&self, container: ContainerId) -> bool {
        match self.configs.get(&container).and_then(|c| c.kind.capacity()) {
            Some(capacity) => self.count(container) >= capacity,
            None => false,
        }
    }

    /// Whether an entity is tracked at all.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }

    /// Total number of tracked entities.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
