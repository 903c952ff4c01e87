//! Reading live-object parameters out of the document.

use sb_core::GoalParam;
use sb_editor::GoalEditor;
use sb_engine::GoalSpec;

/// The parameter set of the goal under `goal`, or `None` if the goal has no
/// (recognised) `type`.
///
/// Only the parameters the goal type consumes are read; anything else stored
/// on the node is left out of the returned `GoalSpec`.
pub fn goal_spec(goal: &GoalEditor<'_>) -> Option<GoalSpec> {
    let goal_type = goal.goal_type()?;
    let mut spec = GoalSpec::new(goal_type);
    spec.enabled = goal.is_enabled().unwrap_or(true);

    for param in goal_type.params() {
        match param {
            GoalParam::Angle     => spec.angle = goal.angle(),
            GoalParam::Distance  => spec.distance = goal.distance(),
            GoalParam::Speed     => spec.speed = goal.speed(),
            GoalParam::Time      => spec.time = goal.time(),
            GoalParam::Forward   => spec.forward = goal.forward(),
            GoalParam::Agent     => spec.agent = goal.agent(),
            GoalParam::Agents    => spec.agents = goal.agents().unwrap_or_default(),
            GoalParam::Obstacles => spec.obstacles = goal.obstacles().unwrap_or_default(),
            GoalParam::Path      => spec.path = goal.goal_path(),
        }
    }
    Some(spec)
}
