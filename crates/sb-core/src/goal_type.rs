//! The closed set of goal kinds and the parameters each one consumes.
//!
//! A goal's `type` is written once, when the goal is constructed.  Every other
//! goal attribute is optional; which ones matter depends on the type (see
//! [`GoalType::params`]).

use std::fmt;
use std::str::FromStr;

use crate::schema::attr;
use crate::CoreError;

/// What a goal steers its agent toward (or away from).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GoalType {
    Align,
    AvoidAgents,
    AvoidObstacles,
    Cohere,
    Flee,
    FollowPath,
    Intercept,
    ReachSpeed,
    Seek,
    Separate,
    StayOnPath,
    Wander,
}

/// One optional, type-dependent goal parameter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GoalParam {
    Angle,
    Distance,
    Speed,
    Time,
    Forward,
    Agent,
    Agents,
    Obstacles,
    Path,
}

impl GoalParam {
    /// Attribute key under which the parameter is stored on a goal node.
    pub fn key(self) -> &'static str {
        match self {
            GoalParam::Angle     => attr::ANGLE,
            GoalParam::Distance  => attr::DISTANCE,
            GoalParam::Speed     => attr::SPEED,
            GoalParam::Time      => attr::TIME,
            GoalParam::Forward   => attr::FORWARD,
            GoalParam::Agent     => attr::AGENT,
            GoalParam::Agents    => attr::AGENTS,
            GoalParam::Obstacles => attr::OBSTACLES,
            GoalParam::Path      => attr::PATH,
        }
    }
}

impl GoalType {
    pub const ALL: [GoalType; 12] = [
        GoalType::Align,
        GoalType::AvoidAgents,
        GoalType::AvoidObstacles,
        GoalType::Cohere,
        GoalType::Flee,
        GoalType::FollowPath,
        GoalType::Intercept,
        GoalType::ReachSpeed,
        GoalType::Seek,
        GoalType::Separate,
        GoalType::StayOnPath,
        GoalType::Wander,
    ];

    /// The stored attribute value for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            GoalType::Align          => "align",
            GoalType::AvoidAgents    => "avoidAgents",
            GoalType::AvoidObstacles => "avoidObstacles",
            GoalType::Cohere         => "cohere",
            GoalType::Flee           => "flee",
            GoalType::FollowPath     => "followPath",
            GoalType::Intercept      => "intercept",
            GoalType::ReachSpeed     => "reachSpeed",
            GoalType::Seek           => "seek",
            GoalType::Separate       => "separate",
            GoalType::StayOnPath     => "stayOnPath",
            GoalType::Wander         => "wander",
        }
    }

    /// Parameters the engine reads when constructing a goal of this type.
    pub fn params(self) -> &'static [GoalParam] {
        use GoalParam::*;
        match self {
            GoalType::Align | GoalType::Cohere | GoalType::Separate => &[Agents, Distance, Angle],
            GoalType::AvoidAgents    => &[Agents, Time],
            GoalType::AvoidObstacles => &[Obstacles, Time],
            GoalType::Flee | GoalType::Seek => &[Agent],
            GoalType::FollowPath     => &[Path, Time, Forward],
            GoalType::Intercept      => &[Agent, Time],
            GoalType::ReachSpeed | GoalType::Wander => &[Speed],
            GoalType::StayOnPath     => &[Path, Time],
        }
    }

    #[inline]
    pub fn uses(self, param: GoalParam) -> bool {
        self.params().contains(&param)
    }
}

impl FromStr for GoalType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownGoalType(s.to_owned()))
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
