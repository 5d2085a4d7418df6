//! The document tree: containers of named children and leaf values.
//!
//! Localization files are JSON, but the reconciler only cares about one
//! distinction: does a node hold named children or not. [`Node`] encodes that
//! directly. JSON arrays are kept as opaque [`Leaf::List`] values; nothing
//! inside a list is addressable by a key path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Named children of a container node, in document order.
///
/// Order is preserved so that rewritten files keep their layout; it carries no
/// meaning for diff or merge.
pub type Container = IndexMap<String, Node>;

/// A single node of a document tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Node {
    /// A mapping from string keys to child nodes.
    Container(Container),
    /// A terminal value.
    Leaf(Leaf),
}

/// A terminal value in a document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leaf {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// An ordered list of values. Treated as a single opaque leaf.
    List(Vec<Node>),
}

impl Node {
    /// Create an empty container node.
    pub fn empty_container() -> Self {
        Node::Container(Container::new())
    }

    /// Create a string leaf.
    pub fn string(value: impl Into<String>) -> Self {
        Node::Leaf(Leaf::String(value.into()))
    }

    /// Returns `true` if this node holds named children.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    /// Borrow the children of a container node.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Mutably borrow the children of a container node.
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Node::Container(children) => Some(children),
            Node::Leaf(_) => None,
        }
    }

    /// Short human-readable name of the node's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Container(_) => "container",
            Node::Leaf(leaf) => leaf.kind(),
        }
    }
}

impl Leaf {
    /// Short human-readable name of the leaf's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Leaf::Null => "null",
            Leaf::Bool(_) => "boolean",
            Leaf::Number(_) => "number",
            Leaf::String(_) => "string",
            Leaf::List(_) => "list",
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::empty_container()
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Container(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            Value::Array(items) => {
                Node::Leaf(Leaf::List(items.into_iter().map(Node::from).collect()))
            }
            Value::String(s) => Node::Leaf(Leaf::String(s)),
            Value::Number(n) => Node::Leaf(Leaf::Number(n)),
            Value::Bool(b) => Node::Leaf(Leaf::Bool(b)),
            Value::Null => Node::Leaf(Leaf::Null),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Container(children) => Value::Object(
                children
                    .into_iter()
                    .map(|(key, child)| (key, Value::from(child)))
                    .collect::<Map<String, Value>>(),
            ),
            Node::Leaf(Leaf::List(items)) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            Node::Leaf(Leaf::String(s)) => Value::String(s),
            Node::Leaf(Leaf::Number(n)) => Value::Number(n),
            Node::Leaf(Leaf::Bool(b)) => Value::Bool(b),
            Node::Leaf(Leaf::Null) => Value::Null,
        }
    }
}
