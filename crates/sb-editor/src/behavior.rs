//! Behavior editor: one behavior and its weighted set of goals.

use sb_core::schema::{GOALS, attr};
use sb_core::{GoalType, Path, PathKind};
use sb_document::{Document, Node};

use crate::access::{children_by_serial, construct, read};
use crate::{CompositeEditor, EditError, EditResult, GoalEditor};

/// Cursor at `[agents, A, behaviors, B]`.
#[derive(Clone)]
pub struct BehaviorEditor<'d> {
    doc:  &'d Document,
    path: Path,
}

impl<'d> BehaviorEditor<'d> {
    /// # Panics
    /// Panics if `path` is not a behavior path.
    pub fn new(doc: &'d Document, path: Path) -> Self {
        assert!(
            path.kind().is_behavior(),
            "behavior editor bound to non-behavior path {path}"
        );
        Self { doc, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        match self.path.kind() {
            PathKind::Behavior { behavior, .. } => behavior,
            _ => unreachable!("checked in BehaviorEditor::new"),
        }
    }

    pub fn agent_name(&self) -> &str {
        match self.path.kind() {
            PathKind::Behavior { agent, .. } => agent,
            _ => unreachable!("checked in BehaviorEditor::new"),
        }
    }

    pub fn composite(&self) -> CompositeEditor<'d> {
        CompositeEditor::new(self.doc, Path::composite(self.agent_name()))
    }

    pub fn serial_number(&self) -> Option<u64> {
        read(self.doc, &self.path, attr::SERIAL_NUMBER, Node::as_u64)
    }

    pub fn exists(&self) -> bool {
        self.doc.contains(&self.path)
    }

    // ── Attributes ────────────────────────────────────────────────────────

    pub fn is_enabled(&self) -> Option<bool> {
        read(self.doc, &self.path, attr::IS_ENABLED, Node::as_bool)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.doc.write(&self.path, attr::IS_ENABLED, enabled);
    }

    /// Edge weight within the agent's composite.  Set it through
    /// [`CompositeEditor::set_weight`].
    pub fn weight(&self) -> Option<f64> {
        read(self.doc, &self.path, attr::WEIGHT, Node::as_f64)
    }

    // ── Goals ─────────────────────────────────────────────────────────────

    fn goals_path(&self) -> Path {
        self.path.child(GOALS)
    }

    /// Create an enabled goal of `goal_type` with the default weight.
    ///
    /// The type is fixed at construction.
    pub fn create_goal(&self, goal_type: GoalType) -> GoalEditor<'d> {
        let doc = self.doc;
        let weight = doc.config().default_weight;
        let path = construct(doc, &self.goals_path(), |path| {
            doc.write_quiet(path, attr::TYPE, goal_type.as_str());
            doc.write_quiet(path, attr::IS_ENABLED, true);
            doc.write_quiet(path, attr::WEIGHT, weight);
        });
        GoalEditor::new(doc, path)
    }

    pub fn goal(&self, name: &str) -> Option<GoalEditor<'d>> {
        let path = self.goals_path().child(name);
        self.doc
            .contains(&path)
            .then(|| GoalEditor::new(self.doc, path))
    }

    /// Every goal, in creation order.
    pub fn goals(&self) -> Vec<GoalEditor<'d>> {
        let container = self.goals_path();
        children_by_serial(self.doc, &container)
            .iter()
            .map(|name| GoalEditor::new(self.doc, container.child(name)))
            .collect()
    }

    pub fn delete_goal(&self, name: &str) -> EditResult<()> {
        self.doc
            .delete(&self.goals_path().child(name))
            .map(|_| ())
            .ok_or_else(|| self.not_found(name))
    }

    // ── Edge weights ──────────────────────────────────────────────────────

    pub fn weight_for(&self, for_child: &str) -> Option<f64> {
        read(self.doc, &self.goals_path().child(for_child), attr::WEIGHT, Node::as_f64)
    }

    /// Set the edge weight of goal `for_child` within this behavior.
    pub fn set_weight(&self, for_child: &str, to: f64) -> EditResult<()> {
        let child = self.goals_path().child(for_child);
        if !self.doc.contains(&child) {
            return Err(self.not_found(for_child));
        }
        self.doc.write(&child, attr::WEIGHT, to);
        Ok(())
    }

    fn not_found(&self, name: &str) -> EditError {
        EditError::NotFound {
            kind:   "goal",
            name:   name.to_owned(),
            parent: self.goals_path(),
        }
    }
}
