//! The drag gesture state machine.
//!
//! One pointer interaction on one entity is a gesture:
//! begin → zero-or-more moves → (optional drop claim) → finish. The three
//! phases are explicit states instead of implicit callback ordering:
//!
//! - `Idle`: no gesture in progress.
//! - `Dragging`: the entity follows the pointer; its drag-origin container
//!   is recorded so it can spring back.
//! - `Resolving`: a drop target has claimed the entity's parent-after-drag;
//!   only release finalization remains.
//!
//! The controller owns no entities and moves no membership; it only tracks
//! the gesture. The tabletop applies its outcomes.

use serde::{Deserialize, Serialize};

use log::warn;

use crate::core::entity::EntityId;
use crate::table::container::ContainerId;

/// A screen position, in whatever units the input provider uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where the gesture currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Entity follows the pointer; no membership has changed.
    Dragging,
    /// A drop target has claimed the entity; awaiting release finalization.
    Resolving,
}

/// How a finished gesture resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOutcome {
    /// The entity that was dragged.
    pub entity: EntityId,
    /// The container the gesture started from.
    pub origin: ContainerId,
    /// Where the entity reparents: the claiming slot, or the origin if no
    /// target claimed it.
    pub parent_after_drag: ContainerId,
}

impl DragOutcome {
    /// Whether the entity ended up back where it started.
    #[must_use]
    pub fn sprang_back(&self) -> bool {
        self.parent_after_drag == self.origin
    }
}

#[derive(Clone, Copy, Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        entity: EntityId,
        origin: ContainerId,
        pointer: Point,
    },
    Resolving {
        entity: EntityId,
        origin: ContainerId,
        target: ContainerId,
    },
}

/// Tracks at most one in-progress drag gesture.
///
/// A second gesture cannot begin mid-drag: the dragged entity is the one
/// being moved, and `begin` refuses until the current gesture finishes.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of the gesture.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging { .. } => DragPhase::Dragging,
            DragState::Resolving { .. } => DragPhase::Resolving,
        }
    }

    /// The entity being dragged, if a gesture is in progress.
    #[must_use]
    pub fn entity(&self) -> Option<EntityId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { entity, .. } | DragState::Resolving { entity, .. } => {
                Some(entity)
            }
        }
    }

    /// The drag-origin container, if a gesture is in progress.
    #[must_use]
    pub fn origin(&self) -> Option<ContainerId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { origin, .. } | DragState::Resolving { origin, .. } => {
                Some(origin)
            }
        }
    }

    /// Begin a gesture: record the entity and its drag-origin container.
    ///
    /// Refused (returns `false`) if a gesture is already in progress.
    pub fn begin(&mut self, entity: EntityId, origin: ContainerId, pointer: Point) -> bool {
        match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging {
                    entity,
                    origin,
                    pointer,
                };
                true
            }
            _ => {
                warn!("refusing to begin drag of {entity}: a gesture is already in progress");
                false
            }
        }
    }

    /// Move the pointer. Returns the position the entity should take, or
    /// `None` when no entity is following the pointer.
    pub fn update(&mut self, to: Point) -> Option<Point> {
        match &mut self.state {
            DragState::Dragging { pointer, .. } => {
                *pointer = to;
                Some(to)
            }
            _ => None,
        }
    }

    /// A drop target claims the entity's parent-after-drag.
    ///
    /// Only one claim per gesture; refused outside the `Dragging` phase.
    pub fn claim(&mut self, target: ContainerId) -> bool {
        match self.state {
            DragState::Dragging { entity, origin, .. } => {
                self.state = DragState::Resolving {
                    entity,
                    origin,
                    target,
                };
                true
            }
            _ => false,
        }
    }

    /// Finish the gesture and return how it resolved.
    ///
    /// Without a prior claim the entity reparents to its origin. Finishing
    /// from `Idle` (a spurious end-without-begin event) is a no-op.
    pub fn finish(&mut self) -> Option<DragOutcome> {
        let outcome = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { entity, origin, .. } => DragOutcome {
                entity,
                origin,
                parent_after_drag: origin,
            },
            DragState::Resolving {
                entity,
                origin,
                target,
            } => DragOutcome {
                entity,
                origin,
                parent_after_drag: target,
            },
        };
        self.state = DragState::Idle;
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: EntityId = EntityId(10);
    const HAND: ContainerId = ContainerId(0);
    const SLOT: ContainerId = ContainerId(1);

    #[test]
    fn test_begin_records_origin() {
        let mut drag = DragController::new();

        assert!(drag.begin(CARD, HAND, Point::new(5.0, 5.0)));
        assert_eq!(drag.phase(), DragPhase::Dragging);
        assert_eq!(drag.entity(), Some(CARD));
        assert_eq!(drag.origin(), Some(HAND));
    }

    #[test]
    fn test_second_begin_is_refused() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);

        assert!(!drag.begin(EntityId(11), HAND, Point::ZERO));
        // The original gesture is untouched
        assert_eq!(drag.entity(), Some(CARD));
    }

    #[test]
    fn test_update_tracks_pointer() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);

        assert_eq!(drag.update(Point::new(3.0, 4.0)), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_update_without_gesture_is_noop() {
        let mut drag = DragController::new();
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_unclaimed_finish_springs_back() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);

        let outcome = drag.finish().unwrap();
        assert_eq!(outcome.parent_after_drag, HAND);
        assert!(outcome.sprang_back());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_claim_redirects_finish() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);

        assert!(drag.claim(SLOT));
        assert_eq!(drag.phase(), DragPhase::Resolving);

        let outcome = drag.finish().unwrap();
        assert_eq!(outcome.entity, CARD);
        assert_eq!(outcome.origin, HAND);
        assert_eq!(outcome.parent_after_drag, SLOT);
        assert!(!outcome.sprang_back());
    }

    #[test]
    fn test_only_one_claim_per_gesture() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);

        assert!(drag.claim(SLOT));
        assert!(!drag.claim(ContainerId(2)));

        let outcome = drag.finish().unwrap();
        assert_eq!(outcome.parent_after_drag, SLOT);
    }

    #[test]
    fn test_claim_without_gesture_is_refused() {
        let mut drag = DragController::new();
        assert!(!drag.claim(SLOT));
    }

    #[test]
    fn test_spurious_finish_is_noop() {
        let mut drag = DragController::new();
        assert_eq!(drag.finish(), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_controller_is_reusable_after_finish() {
        let mut drag = DragController::new();
        drag.begin(CARD, HAND, Point::ZERO);
        drag.finish();

        assert!(drag.begin(EntityId(11), SLOT, Point::ZERO));
        assert_eq!(drag.origin(), Some(SLOT));
    }
}
