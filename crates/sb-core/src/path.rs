//! `Path` — an ordered key sequence from the document root to a node.
//!
//! Depth is significant and fixed by the schema (see [`crate::schema`]); the
//! schema constructors here are the only place that spell out the fixed
//! container segments, so callers never assemble agent/behavior/goal paths by
//! hand.

use std::fmt;

use crate::schema::{AGENTS, BEHAVIORS, GOALS};
use crate::{Key, PathKind};

/// Ordered sequence of keys addressing a node in the document tree.
///
/// The empty path is the document root.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Key>);

impl Path {
    /// The document root (length 0).
    #[inline]
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn new(keys: Vec<Key>) -> Self {
        Path(keys)
    }

    // ── Schema constructors ───────────────────────────────────────────────

    /// `["agents"]`
    pub fn agents() -> Self {
        Path(vec![Key::from(AGENTS)])
    }

    /// `["agents", agent]`
    pub fn agent(agent: &str) -> Self {
        Self::agents().child(agent)
    }

    /// `["agents", agent, "behaviors"]`
    pub fn composite(agent: &str) -> Self {
        Self::agent(agent).child(BEHAVIORS)
    }

    /// `["agents", agent, "behaviors", behavior]`
    pub fn behavior(agent: &str, behavior: &str) -> Self {
        Self::composite(agent).child(behavior)
    }

    /// `["agents", agent, "behaviors", behavior, "goals"]`
    pub fn goals(agent: &str, behavior: &str) -> Self {
        Self::behavior(agent, behavior).child(GOALS)
    }

    /// `["agents", agent, "behaviors", behavior, "goals", goal]`
    pub fn goal(agent: &str, behavior: &str, goal: &str) -> Self {
        Self::goals(agent, behavior).child(goal)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn last(&self) -> Option<&Key> {
        self.0.last()
    }

    /// The name at position `i`, if that segment exists and is a name.
    pub fn name_at(&self, i: usize) -> Option<&str> {
        self.0.get(i).and_then(Key::as_name)
    }

    /// Schema classification of this path.  Total: every path maps to
    /// exactly one [`PathKind`].
    #[inline]
    pub fn kind(&self) -> PathKind<'_> {
        PathKind::of(self)
    }

    // ── Derivation ────────────────────────────────────────────────────────

    /// A new path one segment deeper.
    pub fn child(&self, key: impl Into<Key>) -> Path {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend_from_slice(&self.0);
        keys.push(key.into());
        Path(keys)
    }

    /// The path one segment shallower.  `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        self.0.split_last().map(|(_, init)| Path(init.to_vec()))
    }

    /// The first `len` segments of this path.
    ///
    /// # Panics
    /// Panics if `len > self.len()`.
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len].to_vec())
    }

    pub fn starts_with(&self, other: &Path) -> bool {
        self.0.starts_with(&other.0)
    }

    /// `true` if any segment is exactly the name `name`.
    ///
    /// Generated names are opaque tokens, so this is a whole-segment match,
    /// never a substring or prefix comparison.
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|key| key == name)
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for key in &self.0 {
            write!(f, "/{key}")?;
        }
        Ok(())
    }
}
