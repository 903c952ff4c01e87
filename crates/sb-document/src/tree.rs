//! Pure path-addressed storage.
//!
//! `Tree` knows nothing about notifications or the agent schema.  Writing
//! through a path whose intermediate segments do not exist materializes them
//! as empty containers: an object when the next key is a name, an array when
//! it is an index.

use sb_core::Path;

use crate::Node;

/// The authoritative nested key → value structure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tree {
    root: Node,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// A tree whose root is an empty object.
    pub fn new() -> Self {
        Self { root: Node::object() }
    }

    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn get(&self, path: &Path) -> Option<&Node> {
        path.keys()
            .iter()
            .try_fold(&self.root, |node, key| node.child(key))
    }

    #[inline]
    pub fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    /// The deepest prefix of `path` that exists (the root always does).
    pub fn deepest_existing(&self, path: &Path) -> Path {
        let mut node = &self.root;
        let mut depth = 0;
        for key in path.keys() {
            match node.child(key) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => break,
            }
        }
        path.prefix(depth)
    }

    /// Object children of the node at `path` as `(key, child)` pairs, in
    /// arbitrary order.  Empty if the node is missing or not an object.
    pub fn children<'t>(&'t self, path: &Path) -> impl Iterator<Item = (&'t str, &'t Node)> + use<'t> {
        self.get(path)
            .and_then(Node::as_object)
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Store `node` at `path`, returning the node it replaced.
    ///
    /// Writing the empty path replaces the root.
    pub fn set(&mut self, path: &Path, node: Node) -> Option<Node> {
        let Some((last, init)) = path.keys().split_last() else {
            return Some(std::mem::replace(&mut self.root, node));
        };
        let mut cursor = &mut self.root;
        for key in init {
            cursor = cursor.entry(key);
        }
        cursor.insert(last, node)
    }

    /// Detach and return the node at `path`.  The root cannot be removed.
    pub fn remove(&mut self, path: &Path) -> Option<Node> {
        let (last, init) = path.keys().split_last()?;
        let mut cursor = &mut self.root;
        for key in init {
            cursor = cursor.child_mut(key)?;
        }
        cursor.remove(last)
    }
}
