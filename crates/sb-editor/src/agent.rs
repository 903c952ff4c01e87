//! Agent editor.

use sb_core::schema::{BEHAVIORS, attr};
use sb_core::{Path, PathKind};
use sb_document::{Document, Node};

use crate::CompositeEditor;
use crate::access::{f64_attribute, read};

/// Cursor at `[agents, A]`.
#[derive(Clone)]
pub struct AgentEditor<'d> {
    doc:  &'d Document,
    path: Path,
}

impl<'d> AgentEditor<'d> {
    /// # Panics
    /// Panics if `path` is not an agent path.
    pub fn new(doc: &'d Document, path: Path) -> Self {
        assert!(
            path.kind().is_agent(),
            "agent editor bound to non-agent path {path}"
        );
        Self { doc, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The agent's generated name (its key under `agents`).
    pub fn name(&self) -> &str {
        match self.path.kind() {
            PathKind::Agent { agent } => agent,
            _ => unreachable!("checked in AgentEditor::new"),
        }
    }

    pub fn serial_number(&self) -> Option<u64> {
        read(self.doc, &self.path, attr::SERIAL_NUMBER, Node::as_u64)
    }

    pub fn exists(&self) -> bool {
        self.doc.contains(&self.path)
    }

    // ── Attributes ────────────────────────────────────────────────────────

    pub fn is_paused(&self) -> Option<bool> {
        read(self.doc, &self.path, attr::IS_PAUSED, Node::as_bool)
    }

    pub fn set_paused(&self, paused: bool) {
        self.doc.write(&self.path, attr::IS_PAUSED, paused);
    }

    f64_attribute!(mass, set_mass, attr::MASS);
    f64_attribute!(max_acceleration, set_max_acceleration, attr::MAX_ACCELERATION);
    f64_attribute!(max_speed, set_max_speed, attr::MAX_SPEED);
    f64_attribute!(radius, set_radius, attr::RADIUS);
    f64_attribute!(
        /// Display scale of the agent's sprite.
        scale, set_scale, attr::SCALE
    );

    // ── Composite ─────────────────────────────────────────────────────────

    /// The agent's behavior container, if it has been created.
    pub fn composite(&self) -> Option<CompositeEditor<'d>> {
        let path = self.path.child(BEHAVIORS);
        self.doc
            .contains(&path)
            .then(|| CompositeEditor::new(self.doc, path))
    }

    /// Create the behavior container, or return the existing one.
    pub fn create_composite(&self) -> CompositeEditor<'d> {
        if let Some(existing) = self.composite() {
            return existing;
        }
        self.doc.write(&self.path, BEHAVIORS, Node::object());
        CompositeEditor::new(self.doc, self.path.child(BEHAVIORS))
    }
}
