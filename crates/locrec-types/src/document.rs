//! A loaded document and path-based lookups over it.

use serde::{Deserialize, Serialize};

use crate::node::{Container, Node};
use crate::path::KeyPath;

/// A whole localization document, held fully in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Wrap an existing tree.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// An empty document (`{}`).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Mutably borrow the root node.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Consume the document, returning its root.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Look up the node at `path`. The root path yields the root node.
    pub fn get(&self, path: &KeyPath) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(&self.root, |node, segment| node.as_container()?.get(segment))
    }

    /// Look up a container at `path`; `None` if absent or a leaf.
    pub fn get_container(&self, path: &KeyPath) -> Option<&Container> {
        self.get(path)?.as_container()
    }

    /// Returns `true` if a node exists at `path`.
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.get(path).is_some()
    }
}

impl From<Node> for Document {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        Self::new(Node::from(value))
    }
}
