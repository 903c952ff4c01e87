//! A steering engine that only hands out sequential identities.

use sb_core::{BehaviorId, GoalId};

use crate::{Behavior, Goal, GoalSpec, SteeringEngine};

/// A [`SteeringEngine`] that builds live objects with ascending ids and
/// performs no motion integration.
///
/// Useful as the default engine for editing sessions without a running
/// simulation, and as the identity-observing double in tests.
#[derive(Debug, Default)]
pub struct SerialEngine {
    next_behavior: u32,
    next_goal:     u32,
}

impl SerialEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live behaviors built so far.
    pub fn behaviors_built(&self) -> u32 {
        self.next_behavior
    }

    /// Number of live goals built so far.
    pub fn goals_built(&self) -> u32 {
        self.next_goal
    }
}

impl SteeringEngine for SerialEngine {
    fn make_behavior(&mut self) -> Behavior {
        let id = BehaviorId(self.next_behavior);
        self.next_behavior = id.next().0;
        Behavior::new(id)
    }

    fn make_goal(&mut self, spec: &GoalSpec) -> Goal {
        let id = GoalId(self.next_goal);
        self.next_goal = id.next().0;
        Goal::new(id, spec.clone())
    }
}
