//! Composite editor: the agent's weighted set of behaviors.

use sb_core::schema::{GOALS, attr};
use sb_core::{Path, PathKind};
use sb_document::{Document, Node};

use crate::access::{children_by_serial, construct, read};
use crate::{AgentEditor, BehaviorEditor, EditError, EditResult};

/// Cursor at `[agents, A, behaviors]`.
#[derive(Clone)]
pub struct CompositeEditor<'d> {
    doc:  &'d Document,
    path: Path,
}

impl<'d> CompositeEditor<'d> {
    /// # Panics
    /// Panics if `path` is not a composite path.
    pub fn new(doc: &'d Document, path: Path) -> Self {
        assert!(
            path.kind().is_composite(),
            "composite editor bound to non-composite path {path}"
        );
        Self { doc, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn agent_name(&self) -> &str {
        match self.path.kind() {
            PathKind::Composite { agent } => agent,
            _ => unreachable!("checked in CompositeEditor::new"),
        }
    }

    pub fn agent(&self) -> AgentEditor<'d> {
        AgentEditor::new(self.doc, Path::agent(self.agent_name()))
    }

    // ── Children ──────────────────────────────────────────────────────────

    /// Create an enabled behavior with the default weight and an empty goal
    /// container.
    pub fn create_behavior(&self) -> BehaviorEditor<'d> {
        let doc = self.doc;
        let weight = doc.config().default_weight;
        let path = construct(doc, &self.path, |path| {
            doc.write_quiet(path, attr::IS_ENABLED, true);
            doc.write_quiet(path, attr::WEIGHT, weight);
            doc.write_quiet(path, GOALS, Node::object());
        });
        BehaviorEditor::new(doc, path)
    }

    pub fn behavior(&self, name: &str) -> Option<BehaviorEditor<'d>> {
        let path = self.path.child(name);
        self.doc
            .contains(&path)
            .then(|| BehaviorEditor::new(self.doc, path))
    }

    /// Every behavior, in creation order.
    pub fn behaviors(&self) -> Vec<BehaviorEditor<'d>> {
        children_by_serial(self.doc, &self.path)
            .iter()
            .map(|name| BehaviorEditor::new(self.doc, self.path.child(name)))
            .collect()
    }

    pub fn delete_behavior(&self, name: &str) -> EditResult<()> {
        self.doc
            .delete(&self.path.child(name))
            .map(|_| ())
            .ok_or_else(|| self.not_found(name))
    }

    // ── Edge weights ──────────────────────────────────────────────────────

    pub fn weight(&self, for_child: &str) -> Option<f64> {
        read(self.doc, &self.path.child(for_child), attr::WEIGHT, Node::as_f64)
    }

    /// Set the edge weight of behavior `for_child` within this composite.
    pub fn set_weight(&self, for_child: &str, to: f64) -> EditResult<()> {
        let child = self.path.child(for_child);
        if !self.doc.contains(&child) {
            return Err(self.not_found(for_child));
        }
        self.doc.write(&child, attr::WEIGHT, to);
        Ok(())
    }

    fn not_found(&self, name: &str) -> EditError {
        EditError::NotFound {
            kind:   "behavior",
            name:   name.to_owned(),
            parent: self.path.clone(),
        }
    }
}
