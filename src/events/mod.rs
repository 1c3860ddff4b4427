//! Typed events and synchronous delivery.
//!
//! Interaction and game-state mutation are decoupled through explicit typed
//! events: the tabletop publishes `CardPlayed`, the game authority publishes
//! state-changed notifications. Both travel over `EventBus`, delivered
//! synchronously to registered handlers.

pub mod bus;
pub mod placement;

pub use bus::EventBus;
pub use placement::CardPlayed;
