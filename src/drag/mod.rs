//! Drag gestures as an explicit state machine.
//!
//! ## Key Types
//!
//! - `Point`: screen position supplied by the input provider
//! - `DragPhase`: {Idle, Dragging, Resolving}
//! - `DragController`: tracks at most one in-progress gesture
//! - `DragOutcome`: how a finished gesture resolved

pub mod controller;

pub use controller::{DragController, DragOutcome, DragPhase, Point};
