//=========================================================================
// Actions & Action Sinks
//=========================================================================
//
// Logical actions routed by the key mapper, and the setter seam that
// receives them.
//
// Actions: Opaque identifiers routed by the mapper, interpreted by the sink.
// Sinks:   Anything that accepts `(action, is_active)` updates.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for logical action enums.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and table lookups
/// - `Debug`: Logging support
pub trait Action: 'static + Copy + Eq + Hash + Debug {}

//=== MotionAction ========================================================

/// Directional thrust actions for the controllable block.
///
/// Named in a y-up convention: `Up` pushes toward larger `y`. The canvas
/// grows downward, so `Up` moves the block visually down, which is why the
/// default bindings pair `ArrowUp` with `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionAction {
    Up,
    Down,
    Left,
    Right,
}

impl Action for MotionAction {}

//=== ActionSink ==========================================================

/// Receives on/off updates for an action.
///
/// Implemented by [`InputFlags`](crate::core::motion::InputFlags) and by any
/// `FnMut(A, bool)` closure, which is handy for tests and ad-hoc wiring.
pub trait ActionSink<A: Action> {
    fn set_active(&mut self, action: A, active: bool);
}

impl<A: Action, F: FnMut(A, bool)> ActionSink<A> for F {
    fn set_active(&mut self, action: A, active: bool) {
        self(action, active)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    //=== MotionAction ====================================================

    #[test]
    fn motion_actions_are_distinct() {
        let set: HashSet<_> = [
            MotionAction::Up,
            MotionAction::Down,
            MotionAction::Left,
            MotionAction::Right,
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn motion_action_debug_format() {
        assert_eq!(format!("{:?}", MotionAction::Left), "Left");
    }

    //=== ActionSink ======================================================

    #[test]
    fn closure_is_an_action_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |action: MotionAction, active: bool| seen.push((action, active));
            sink.set_active(MotionAction::Right, true);
            sink.set_active(MotionAction::Right, false);
        }

        assert_eq!(
            seen,
            vec![(MotionAction::Right, true), (MotionAction::Right, false)]
        );
    }
}
