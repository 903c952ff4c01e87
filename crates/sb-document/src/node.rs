//! Tagged-union document values.

use rustc_hash::FxHashMap;
use sb_core::Key;

/// A leaf value.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// One node of the document tree.
///
/// Object children are unordered; consumers that need creation order sort by
/// the `serialNumber` attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Node {
    Object(FxHashMap<String, Node>),
    Array(Vec<Node>),
    Scalar(Value),
}

impl Default for Node {
    fn default() -> Self {
        Node::Scalar(Value::Null)
    }
}

impl Node {
    /// An empty object node.
    pub fn object() -> Self {
        Node::Object(FxHashMap::default())
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Value::Null))
    }

    // ── Navigation ────────────────────────────────────────────────────────

    pub fn child(&self, key: &Key) -> Option<&Node> {
        match (self, key) {
            (Node::Object(map), Key::Name(name)) => map.get(name),
            (Node::Array(items), Key::Index(i)) => items.get(*i),
            _ => None,
        }
    }

    pub fn child_mut(&mut self, key: &Key) -> Option<&mut Node> {
        match (self, key) {
            (Node::Object(map), Key::Name(name)) => map.get_mut(name),
            (Node::Array(items), Key::Index(i)) => items.get_mut(*i),
            _ => None,
        }
    }

    /// The child at `key`, materializing it (and coercing `self` into the
    /// container `key` needs) if it does not exist yet.  A materialized child
    /// starts out `Null`; the next step down coerces it in turn.
    pub(crate) fn entry(&mut self, key: &Key) -> &mut Node {
        match key {
            Key::Name(name) => self
                .object_mut_or_reset()
                .entry(name.clone())
                .or_default(),
            Key::Index(i) => {
                let items = self.array_mut_or_reset();
                if items.len() <= *i {
                    items.resize(*i + 1, Node::default());
                }
                &mut items[*i]
            }
        }
    }

    /// Store `node` at `key`, returning the previous child if there was one.
    pub(crate) fn insert(&mut self, key: &Key, node: Node) -> Option<Node> {
        match key {
            Key::Name(name) => self.object_mut_or_reset().insert(name.clone(), node),
            Key::Index(i) => {
                let items = self.array_mut_or_reset();
                if *i < items.len() {
                    Some(std::mem::replace(&mut items[*i], node))
                } else {
                    items.resize(*i, Node::default());
                    items.push(node);
                    None
                }
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &Key) -> Option<Node> {
        match (self, key) {
            (Node::Object(map), Key::Name(name)) => map.remove(name),
            (Node::Array(items), Key::Index(i)) if *i < items.len() => Some(items.remove(*i)),
            _ => None,
        }
    }

    fn object_mut_or_reset(&mut self) -> &mut FxHashMap<String, Node> {
        if !matches!(self, Node::Object(_)) {
            *self = Node::object();
        }
        match self {
            Node::Object(map) => map,
            _ => unreachable!("node was just reset to an object"),
        }
    }

    fn array_mut_or_reset(&mut self) -> &mut Vec<Node> {
        if !matches!(self, Node::Array(_)) {
            *self = Node::Array(Vec::new());
        }
        match self {
            Node::Array(items) => items,
            _ => unreachable!("node was just reset to an array"),
        }
    }

    // ── Typed reads ───────────────────────────────────────────────────────

    pub fn as_object(&self) -> Option<&FxHashMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.as_value()? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self.as_value()? {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.as_value()? {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_i64().and_then(|i| u64::try_from(i).ok())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.as_value()? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// A homogeneous array of strings.  `None` if any element is not text.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        self.as_array()?
            .iter()
            .map(|n| n.as_str().map(str::to_owned))
            .collect()
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Node::Scalar(v)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Value::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Scalar(Value::Int(i))
    }
}

impl From<u64> for Node {
    /// Values above `i64::MAX` saturate.
    fn from(u: u64) -> Self {
        Node::Scalar(Value::Int(i64::try_from(u).unwrap_or(i64::MAX)))
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Scalar(Value::Float(f))
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Scalar(Value::Text(s.to_owned()))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Scalar(Value::Text(s))
    }
}

impl From<Vec<String>> for Node {
    fn from(items: Vec<String>) -> Self {
        Node::Array(items.into_iter().map(Node::from).collect())
    }
}

impl From<&[String]> for Node {
    fn from(items: &[String]) -> Self {
        Node::Array(items.iter().map(|s| Node::from(s.as_str())).collect())
    }
}
