//! Document schema: fixed container keys, attribute keys, and path
//! classification.
//!
//! # Layout
//!
//! ```text
//! len  kind        shape
//! 0    Root        []
//! 1    AgentList   [agents]
//! 2    Agent       [agents, A]
//! 3    Composite   [agents, A, behaviors]
//! 4    Behavior    [agents, A, behaviors, B]
//! 5    GoalList    [agents, A, behaviors, B, goals]
//! 6    Goal        [agents, A, behaviors, B, goals, G]
//! ```
//!
//! An attribute path is a node path plus one attribute key: `AgentAttribute`
//! (len 3), `BehaviorAttribute` (len 5), `GoalAttribute` (len 7).  Lengths 3
//! and 5 are disambiguated by the fixed container key in the last position.

use crate::{Key, Path};

/// Root collection holding every agent.
pub const AGENTS: &str = "agents";
/// An agent's composite-behavior container.
pub const BEHAVIORS: &str = "behaviors";
/// A behavior's goal container.
pub const GOALS: &str = "goals";

/// Attribute keys stored on agent, behavior, and goal nodes.
pub mod attr {
    pub const NAME:             &str = "name";
    pub const SERIAL_NUMBER:    &str = "serialNumber";

    pub const IS_PAUSED:        &str = "isPaused";
    pub const MASS:             &str = "mass";
    pub const MAX_ACCELERATION: &str = "maxAcceleration";
    pub const MAX_SPEED:        &str = "maxSpeed";
    pub const RADIUS:           &str = "radius";
    pub const SCALE:            &str = "scale";

    pub const IS_ENABLED:       &str = "isEnabled";
    pub const WEIGHT:           &str = "weight";

    pub const TYPE:             &str = "type";
    pub const ANGLE:            &str = "angle";
    pub const DISTANCE:         &str = "distance";
    pub const SPEED:            &str = "speed";
    pub const TIME:             &str = "time";
    pub const FORWARD:          &str = "forward";
    pub const AGENT:            &str = "agent";
    pub const AGENTS:           &str = "agents";
    pub const OBSTACLES:        &str = "obstacles";
    pub const PATH:             &str = "path";
}

/// Schema classification of a [`Path`].
///
/// [`PathKind::of`] is total: every path, including ones the schema never
/// produces, maps to exactly one variant.  Shapes that do not fit the schema
/// land in `Unrecognized` rather than in the nearest-looking variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathKind<'a> {
    Root,
    AgentList,
    Agent { agent: &'a str },
    AgentAttribute { agent: &'a str, attribute: &'a str },
    Composite { agent: &'a str },
    Behavior { agent: &'a str, behavior: &'a str },
    BehaviorAttribute { agent: &'a str, behavior: &'a str, attribute: &'a str },
    GoalList { agent: &'a str, behavior: &'a str },
    Goal { agent: &'a str, behavior: &'a str, goal: &'a str },
    GoalAttribute { agent: &'a str, behavior: &'a str, goal: &'a str, attribute: &'a str },
    Unrecognized,
}

impl<'a> PathKind<'a> {
    pub fn of(path: &'a Path) -> PathKind<'a> {
        use Key::Name as N;

        match path.keys() {
            [] => PathKind::Root,
            [N(r)] if r == AGENTS => PathKind::AgentList,
            [N(r), N(agent)] if r == AGENTS => PathKind::Agent { agent },
            [N(r), N(agent), N(c)] if r == AGENTS && c == BEHAVIORS => {
                PathKind::Composite { agent }
            }
            [N(r), N(agent), N(attribute)] if r == AGENTS => {
                PathKind::AgentAttribute { agent, attribute }
            }
            [N(r), N(agent), N(c), N(behavior)] if r == AGENTS && c == BEHAVIORS => {
                PathKind::Behavior { agent, behavior }
            }
            [N(r), N(agent), N(c), N(behavior), N(g)]
                if r == AGENTS && c == BEHAVIORS && g == GOALS =>
            {
                PathKind::GoalList { agent, behavior }
            }
            [N(r), N(agent), N(c), N(behavior), N(attribute)]
                if r == AGENTS && c == BEHAVIORS =>
            {
                PathKind::BehaviorAttribute { agent, behavior, attribute }
            }
            [N(r), N(agent), N(c), N(behavior), N(g), N(goal)]
                if r == AGENTS && c == BEHAVIORS && g == GOALS =>
            {
                PathKind::Goal { agent, behavior, goal }
            }
            [N(r), N(agent), N(c), N(behavior), N(g), N(goal), N(attribute)]
                if r == AGENTS && c == BEHAVIORS && g == GOALS =>
            {
                PathKind::GoalAttribute { agent, behavior, goal, attribute }
            }
            _ => PathKind::Unrecognized,
        }
    }

    /// The owning agent's name, for every kind at or below an agent.
    pub fn agent(self) -> Option<&'a str> {
        match self {
            PathKind::Agent { agent }
            | PathKind::AgentAttribute { agent, .. }
            | PathKind::Composite { agent }
            | PathKind::Behavior { agent, .. }
            | PathKind::BehaviorAttribute { agent, .. }
            | PathKind::GoalList { agent, .. }
            | PathKind::Goal { agent, .. }
            | PathKind::GoalAttribute { agent, .. } => Some(agent),
            PathKind::Root | PathKind::AgentList | PathKind::Unrecognized => None,
        }
    }

    #[inline]
    pub fn is_agent(self) -> bool {
        matches!(self, PathKind::Agent { .. })
    }

    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, PathKind::Composite { .. })
    }

    #[inline]
    pub fn is_behavior(self) -> bool {
        matches!(self, PathKind::Behavior { .. })
    }

    #[inline]
    pub fn is_goal_list(self) -> bool {
        matches!(self, PathKind::GoalList { .. })
    }

    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, PathKind::Goal { .. })
    }

    /// Short label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            PathKind::Root              => "root",
            PathKind::AgentList         => "agent-list",
            PathKind::Agent { .. }      => "agent",
            PathKind::AgentAttribute { .. } => "agent-attribute",
            PathKind::Composite { .. }  => "composite",
            PathKind::Behavior { .. }   => "behavior",
            PathKind::BehaviorAttribute { .. } => "behavior-attribute",
            PathKind::GoalList { .. }   => "goal-list",
            PathKind::Goal { .. }       => "goal",
            PathKind::GoalAttribute { .. } => "goal-attribute",
            PathKind::Unrecognized      => "unrecognized",
        }
    }
}
