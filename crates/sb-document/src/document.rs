//! `Document` — owner of one edited session's tree.

use std::cell::{Cell, Ref, RefCell, RefMut};

use sb_core::schema::attr;
use sb_core::{EditorConfig, Key, NameGenerator, Path};
use tracing::debug;

use crate::{ChangeEvent, Node, NotificationBus, Tree, WriteGateway};

/// The document-owning component: one per edited file or session.
///
/// The tree is mutated only through [`WriteGateway`]s (and
/// [`delete`](Self::delete)); every mutation is announced on the document's
/// [`NotificationBus`].  Share a document between editors and projectors
/// with `Rc<Document>`.
pub struct Document {
    config:      EditorConfig,
    tree:        RefCell<Tree>,
    bus:         NotificationBus,
    names:       RefCell<NameGenerator>,
    next_serial: Cell<u64>,
}

impl Document {
    /// An empty document.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_tree(config, Tree::new())
    }

    /// Adopt an existing tree (e.g. one produced by a load collaborator).
    ///
    /// Every existing node name is reserved so generated names never
    /// collide with it, and serial numbering resumes above the highest
    /// existing `serialNumber`.
    pub fn with_tree(config: EditorConfig, tree: Tree) -> Self {
        let mut names = NameGenerator::new(config.name_seed, config.name_length);
        let mut max_serial = 0;
        scan(tree.root(), &mut names, &mut max_serial);
        debug!(names = names.len(), max_serial, "document opened");

        Self {
            config,
            tree: RefCell::new(tree),
            bus: NotificationBus::new(),
            names: RefCell::new(names),
            next_serial: Cell::new(max_serial + 1),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Shared borrow of the tree.  Do not hold it across a write.
    pub fn tree(&self) -> Ref<'_, Tree> {
        self.tree.borrow()
    }

    pub(crate) fn tree_mut(&self) -> RefMut<'_, Tree> {
        self.tree.borrow_mut()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.tree().contains(path)
    }

    /// Apply `f` to the node at `path`, if there is one.
    pub fn read<T>(&self, path: &Path, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.tree().get(path).map(f)
    }

    /// A copy of the whole tree, for save collaborators.
    pub fn snapshot(&self) -> Tree {
        self.tree().clone()
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Open an announcing gateway for `key` under `parent`.
    pub fn gateway(&self, parent: &Path, key: impl Into<Key>) -> WriteGateway<'_> {
        WriteGateway::open(self, parent, key.into(), false)
    }

    /// Open a gateway that announces nothing.
    pub fn quiet_gateway(&self, parent: &Path, key: impl Into<Key>) -> WriteGateway<'_> {
        WriteGateway::open(self, parent, key.into(), true)
    }

    /// One-shot announced write of `value` at `parent/key`.
    pub fn write(&self, parent: &Path, key: impl Into<Key>, value: impl Into<Node>) {
        let mut gateway = self.gateway(parent, key);
        gateway.write(value);
        gateway.finish();
    }

    /// One-shot suppressed write of `value` at `parent/key`.
    pub fn write_quiet(&self, parent: &Path, key: impl Into<Key>, value: impl Into<Node>) {
        let mut gateway = self.quiet_gateway(parent, key);
        gateway.write(value);
        gateway.finish();
    }

    /// Remove the node at `path` and announce `Deleted(path)`.
    ///
    /// Removing a missing node (or the root) is a silent no-op.
    pub fn delete(&self, path: &Path) -> Option<Node> {
        let removed = self.tree_mut().remove(path);
        if removed.is_some() {
            debug!(%path, "node deleted");
            self.bus.publish_change(&ChangeEvent::Deleted(path.clone()));
        }
        removed
    }

    // ── Allocation ────────────────────────────────────────────────────────

    /// A fresh node name, unique within this document.
    pub fn generate_name(&self) -> String {
        self.names.borrow_mut().next_name()
    }

    /// The next creation-order serial number.  Strictly increasing.
    pub fn next_serial_number(&self) -> u64 {
        let serial = self.next_serial.get();
        self.next_serial.set(serial + 1);
        serial
    }
}

/// Reserve every `name` attribute and track the largest `serialNumber`.
fn scan(node: &Node, names: &mut NameGenerator, max_serial: &mut u64) {
    match node {
        Node::Object(map) => {
            if let Some(name) = map.get(attr::NAME).and_then(Node::as_str) {
                names.reserve(name);
            }
            if let Some(serial) = map.get(attr::SERIAL_NUMBER).and_then(Node::as_u64) {
                *max_serial = (*max_serial).max(serial);
            }
            for child in map.values() {
                scan(child, names, max_serial);
            }
        }
        Node::Array(items) => {
            for child in items {
                scan(child, names, max_serial);
            }
        }
        Node::Scalar(_) => {}
    }
}
