//! Goal editor.

use sb_core::schema::attr;
use sb_core::{GoalType, Path, PathKind};
use sb_document::{Document, Node};

use crate::BehaviorEditor;
use crate::access::{f64_attribute, read, read_string};

/// Cursor at `[agents, A, behaviors, B, goals, G]`.
///
/// Optional parameters read as `None` when absent, which is the normal state
/// for parameters the goal's type does not use.
#[derive(Clone)]
pub struct GoalEditor<'d> {
    doc:  &'d Document,
    path: Path,
}

impl<'d> GoalEditor<'d> {
    /// # Panics
    /// Panics if `path` is not a goal path.
    pub fn new(doc: &'d Document, path: Path) -> Self {
        assert!(path.kind().is_goal(), "goal editor bound to non-goal path {path}");
        Self { doc, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        match self.path.kind() {
            PathKind::Goal { goal, .. } => goal,
            _ => unreachable!("checked in GoalEditor::new"),
        }
    }

    pub fn behavior(&self) -> BehaviorEditor<'d> {
        match self.path.kind() {
            PathKind::Goal { agent, behavior, .. } => {
                BehaviorEditor::new(self.doc, Path::behavior(agent, behavior))
            }
            _ => unreachable!("checked in GoalEditor::new"),
        }
    }

    pub fn serial_number(&self) -> Option<u64> {
        read(self.doc, &self.path, attr::SERIAL_NUMBER, Node::as_u64)
    }

    pub fn exists(&self) -> bool {
        self.doc.contains(&self.path)
    }

    // ── Motivator attributes ──────────────────────────────────────────────

    pub fn is_enabled(&self) -> Option<bool> {
        read(self.doc, &self.path, attr::IS_ENABLED, Node::as_bool)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.doc.write(&self.path, attr::IS_ENABLED, enabled);
    }

    /// Edge weight within the parent behavior.  Set it through
    /// [`BehaviorEditor::set_weight`].
    pub fn weight(&self) -> Option<f64> {
        read(self.doc, &self.path, attr::WEIGHT, Node::as_f64)
    }

    /// `None` if the type is missing or not one of the known kinds.
    pub fn goal_type(&self) -> Option<GoalType> {
        read_string(self.doc, &self.path, attr::TYPE).and_then(|s| s.parse().ok())
    }

    // ── Parameters ────────────────────────────────────────────────────────

    f64_attribute!(
        /// Maximum angle (radians) for the flocking goals.
        angle, set_angle, attr::ANGLE
    );
    f64_attribute!(
        /// Maximum distance for the flocking goals.
        distance, set_distance, attr::DISTANCE
    );
    f64_attribute!(speed, set_speed, attr::SPEED);
    f64_attribute!(
        /// Prediction horizon in seconds.
        time, set_time, attr::TIME
    );

    pub fn forward(&self) -> Option<bool> {
        read(self.doc, &self.path, attr::FORWARD, Node::as_bool)
    }

    pub fn set_forward(&self, forward: bool) {
        self.doc.write(&self.path, attr::FORWARD, forward);
    }

    /// Name of the single target agent (seek, flee, intercept).
    pub fn agent(&self) -> Option<String> {
        read_string(self.doc, &self.path, attr::AGENT)
    }

    pub fn set_agent(&self, agent: &str) {
        self.doc.write(&self.path, attr::AGENT, agent);
    }

    /// Names of the agents a group goal refers to.
    pub fn agents(&self) -> Option<Vec<String>> {
        read(self.doc, &self.path, attr::AGENTS, Node::as_string_list)
    }

    pub fn set_agents(&self, agents: &[String]) {
        self.doc.write(&self.path, attr::AGENTS, agents);
    }

    pub fn obstacles(&self) -> Option<Vec<String>> {
        read(self.doc, &self.path, attr::OBSTACLES, Node::as_string_list)
    }

    pub fn set_obstacles(&self, obstacles: &[String]) {
        self.doc.write(&self.path, attr::OBSTACLES, obstacles);
    }

    /// Name of the drawn path a path goal follows.
    pub fn goal_path(&self) -> Option<String> {
        read_string(self.doc, &self.path, attr::PATH)
    }

    pub fn set_goal_path(&self, path: &str) {
        self.doc.write(&self.path, attr::PATH, path);
    }
}
