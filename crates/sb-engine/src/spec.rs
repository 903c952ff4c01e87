//! `GoalSpec` — everything needed to construct one live goal.

use sb_core::{GoalParam, GoalType};

/// Parameters of a live goal, as read from a goal node.
///
/// Only `goal_type` is mandatory.  The optional fields are the union of all
/// goal parameters; a goal type consumes the subset listed by
/// [`GoalType::params`] and ignores the rest.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalSpec {
    pub goal_type: GoalType,
    pub enabled:   bool,
    pub angle:     Option<f64>,
    pub distance:  Option<f64>,
    pub speed:     Option<f64>,
    pub time:      Option<f64>,
    pub forward:   Option<bool>,
    pub agent:     Option<String>,
    pub agents:    Vec<String>,
    pub obstacles: Vec<String>,
    pub path:      Option<String>,
}

impl GoalSpec {
    /// An enabled goal of `goal_type` with no parameters set.
    pub fn new(goal_type: GoalType) -> Self {
        Self {
            goal_type,
            enabled:   true,
            angle:     None,
            distance:  None,
            speed:     None,
            time:      None,
            forward:   None,
            agent:     None,
            agents:    Vec::new(),
            obstacles: Vec::new(),
            path:      None,
        }
    }

    /// `true` if `param` has a value in this spec.
    pub fn has(&self, param: GoalParam) -> bool {
        match param {
            GoalParam::Angle     => self.angle.is_some(),
            GoalParam::Distance  => self.distance.is_some(),
            GoalParam::Speed     => self.speed.is_some(),
            GoalParam::Time      => self.time.is_some(),
            GoalParam::Forward   => self.forward.is_some(),
            GoalParam::Agent     => self.agent.is_some(),
            GoalParam::Agents    => !self.agents.is_empty(),
            GoalParam::Obstacles => !self.obstacles.is_empty(),
            GoalParam::Path      => self.path.is_some(),
        }
    }

    /// Parameters the goal type consumes that this spec leaves unset.
    pub fn missing_params(&self) -> impl Iterator<Item = GoalParam> + '_ {
        self.goal_type.params().iter().copied().filter(|p| !self.has(*p))
    }
}
