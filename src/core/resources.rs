//! Resource kinds, amounts, and the balance pool.
//!
//! Card costs and production are sequences of `ResourceAmount`, immutable
//! once they are part of a `CardDefinition`. The mutable side lives in
//! `ResourcePool`, the per-session balance table written only by the game
//! authority.
//!
//! Balances are `i64` and are allowed to go negative: deduction on play is
//! unconditional, there is no affordability gate in front of it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The currencies cards cost and produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Wood,
    Gold,
    Stone,
    Food,
}

impl ResourceKind {
    /// All resource kinds, in display order.
    pub const ALL: [Self; 4] = [Self::Wood, Self::Gold, Self::Stone, Self::Food];
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wood => "wood",
            Self::Gold => "gold",
            Self::Stone => "stone",
            Self::Food => "food",
        };
        write!(f, "{name}")
    }
}

/// A (kind, value) pair as it appears in card costs and production.
///
/// Immutable once part of a definition; `value` is non-negative by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceAmount {
    pub kind: ResourceKind,
    pub value: u32,
}

impl ResourceAmount {
    /// Create a new resource amount.
    #[must_use]
    pub const fn new(kind: ResourceKind, value: u32) -> Self {
        Self { kind, value }
    }
}

impl std::fmt::Display for ResourceAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.kind)
    }
}

/// Per-session resource balances.
///
/// Missing kinds read as zero. Balances may go negative; the pool records
/// whatever the authority applies, it does not validate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    balances: FxHashMap<ResourceKind, i64>,
}

impl ResourcePool {
    /// Create an empty pool (all balances zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with the same starting balance for every kind.
    #[must_use]
    pub fn uniform(value: i64) -> Self {
        let mut pool = Self::new();
        for kind in ResourceKind::ALL {
            pool.set(kind, value);
        }
        pool
    }

    /// Get the balance for a kind (zero if never touched).
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> i64 {
        self.balances.get(&kind).copied().unwrap_or(0)
    }

    /// Set the balance for a kind.
    pub fn set(&mut self, kind: ResourceKind, value: i64) {
        self.balances.insert(kind, value);
    }

    /// Modify a balance by delta. Returns the new balance.
    pub fn modify(&mut self, kind: ResourceKind, delta: i64) -> i64 {
        let next = self.get(kind) + delta;
        self.balances.insert(kind, next);
        next
    }

    /// Iterate over all non-default balances.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, i64)> + '_ {
        self.balances.iter().map(|(&k, &v)| (k, v))
    }
}
