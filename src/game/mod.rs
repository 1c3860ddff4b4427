//! Game authority and session wiring.
//!
//! ## Key Types
//!
//! - `GameAuthority`: sole writer of `GameState`, reacts to placement
//!   events, publishes state-changed notifications
//! - `GameSession` / `SessionConfig`: composition root: registry, deck,
//!   tabletop, authority, seeded RNG

pub mod authority;
pub mod session;

pub use authority::GameAuthority;
pub use session::{GameSession, SessionConfig};
