//! The `SteeringEngine` trait — the seam between the projector and the engine.

use crate::{Behavior, CompositeBehavior, Goal, GoalSpec};

/// Factory for live steering objects.
///
/// The engine issues an identity for every object it builds.  Identities are
/// never reused, so a caller can tell a patched object from a replaced one by
/// comparing ids.
///
/// Wiring (adding, re-weighting and removing children) happens on the live
/// containers themselves; the engine only constructs.
pub trait SteeringEngine {
    /// Build a fresh, empty, enabled live behavior.
    fn make_behavior(&mut self) -> Behavior;

    /// Build a live goal from `spec`.
    fn make_goal(&mut self, spec: &GoalSpec) -> Goal;

    /// Build the empty top-level composite for one agent.
    ///
    /// Default: a plain [`CompositeBehavior`].
    fn make_composite(&mut self) -> CompositeBehavior {
        CompositeBehavior::new()
    }
}
