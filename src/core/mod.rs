//! Core types: entity identity, resources, RNG, and game state.
//!
//! ## Key Types
//!
//! - `EntityId`: identifier for live card entities
//! - `ResourceKind` / `ResourceAmount` / `ResourcePool`: currencies
//! - `GameRng`: deterministic seeded randomness for the draw mechanic
//! - `GameState`: the single source of truth mutated only by the authority

pub mod entity;
pub mod resources;
pub mod rng;
pub mod state;

pub use entity::EntityId;
pub use resources::{ResourceAmount, ResourceKind, ResourcePool};
pub use rng::GameRng;
pub use state::GameState;
