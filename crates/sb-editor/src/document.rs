//! Root editor: creates, finds, and deletes agents.

use sb_core::Path;
use sb_core::schema::attr;
use sb_document::Document;

use crate::access::{children_by_serial, construct};
use crate::{AgentEditor, EditError, EditResult};

/// Entry point for editing one document.
#[derive(Clone, Copy)]
pub struct DocumentEditor<'d> {
    doc: &'d Document,
}

impl<'d> DocumentEditor<'d> {
    pub fn new(doc: &'d Document) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &'d Document {
        self.doc
    }

    /// Create an agent with a generated name and the configured default
    /// attributes.  The agent has no composite until
    /// [`AgentEditor::create_composite`] is called.
    pub fn create_agent(&self) -> AgentEditor<'d> {
        let doc = self.doc;
        let defaults = &doc.config().agent;
        let path = construct(doc, &Path::agents(), |path| {
            doc.write_quiet(path, attr::IS_PAUSED, defaults.is_paused);
            doc.write_quiet(path, attr::MASS, defaults.mass);
            doc.write_quiet(path, attr::MAX_ACCELERATION, defaults.max_acceleration);
            doc.write_quiet(path, attr::MAX_SPEED, defaults.max_speed);
            doc.write_quiet(path, attr::RADIUS, defaults.radius);
            doc.write_quiet(path, attr::SCALE, defaults.scale);
        });
        AgentEditor::new(doc, path)
    }

    pub fn agent(&self, name: &str) -> Option<AgentEditor<'d>> {
        let path = Path::agent(name);
        self.doc.contains(&path).then(|| AgentEditor::new(self.doc, path))
    }

    /// Every agent, in creation order.
    pub fn agents(&self) -> Vec<AgentEditor<'d>> {
        children_by_serial(self.doc, &Path::agents())
            .iter()
            .map(|name| AgentEditor::new(self.doc, Path::agent(name)))
            .collect()
    }

    pub fn delete_agent(&self, name: &str) -> EditResult<()> {
        self.doc
            .delete(&Path::agent(name))
            .map(|_| ())
            .ok_or_else(|| EditError::NotFound {
                kind:   "agent",
                name:   name.to_owned(),
                parent: Path::agents(),
            })
    }
}
