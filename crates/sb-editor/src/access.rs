//! Shared read helpers and node construction for the typed editors.

use sb_core::Path;
use sb_core::schema::attr;
use sb_document::{Document, Node};
use tracing::debug;

/// Generate an `Option<f64>` getter and an announced setter for one
/// attribute of the editor's own node.
macro_rules! f64_attribute {
    ($(#[$meta:meta])* $get:ident, $set:ident, $key:expr) => {
        $(#[$meta])*
        pub fn $get(&self) -> Option<f64> {
            crate::access::read(self.doc, &self.path, $key, sb_document::Node::as_f64)
        }

        pub fn $set(&self, value: f64) {
            self.doc.write(&self.path, $key, value);
        }
    };
}

pub(crate) use f64_attribute;

/// Read attribute `key` of the node at `path` through `f`.
pub(crate) fn read<T>(
    doc:  &Document,
    path: &Path,
    key:  &str,
    f:    impl FnOnce(&Node) -> Option<T>,
) -> Option<T> {
    doc.read(&path.child(key), f).flatten()
}

pub(crate) fn read_string(doc: &Document, path: &Path, key: &str) -> Option<String> {
    read(doc, path, key, |n| n.as_str().map(str::to_owned))
}

/// Names of the object children of `container`, in creation order.
///
/// Children without a `serialNumber` sort last; ties break by name so the
/// order is total.
pub(crate) fn children_by_serial(doc: &Document, container: &Path) -> Vec<String> {
    let tree = doc.tree();
    let mut children: Vec<(u64, &str)> = tree
        .children(container)
        .filter(|(_, node)| node.as_object().is_some())
        .map(|(name, node)| {
            let serial = node
                .as_object()
                .and_then(|m| m.get(attr::SERIAL_NUMBER))
                .and_then(Node::as_u64)
                .unwrap_or(u64::MAX);
            (serial, name)
        })
        .collect();
    children.sort_unstable();
    children.into_iter().map(|(_, name)| name.to_owned()).collect()
}

/// Create a named child node under `parent` and return its path.
///
/// One announcing gateway covers the whole construction: the empty node is
/// written first, then `name`, then `serialNumber`, then whatever `init`
/// writes (which must use suppressed writes), and only then does the outer
/// gateway announce the new node.
pub(crate) fn construct(doc: &Document, parent: &Path, init: impl FnOnce(&Path)) -> Path {
    let name = doc.generate_name();
    let mut gateway = doc.gateway(parent, name.as_str());
    gateway.write(Node::object());
    let path = gateway.target().clone();

    let serial = doc.next_serial_number();
    doc.write_quiet(&path, attr::NAME, name.as_str());
    doc.write_quiet(&path, attr::SERIAL_NUMBER, serial);
    init(&path);

    gateway.finish();
    debug!(%path, serial, "node constructed");
    path
}
