//! Path-ensuring merge.
//!
//! Walks a key path from the root, creating an empty container for every
//! segment that does not exist yet, then assigns the subtree to the final
//! segment. The assignment replaces whatever was at that exact key; it is not
//! a field-by-field merge. Keys off the path are never touched.

use tracing::debug;

use locrec_types::{Container, KeyPath, Leaf, Node};

use crate::error::{MergeError, MergeResult};

/// Install `subtree` at `path` inside `target`.
///
/// Returns the value previously held at the terminal key, if any.
///
/// # Errors
///
/// - [`MergeError::EmptyPath`] if `path` is the root.
/// - [`MergeError::PathConflict`] if the root or any node above the terminal
///   key is a leaf. `target` is left unchanged in that case.
pub fn merge_at_path(target: &mut Node, path: &KeyPath, subtree: Node) -> MergeResult<Option<Node>> {
    let (last, parents) = path.segments().split_last().ok_or(MergeError::EmptyPath)?;
    let parent = ensure_container(target, parents)?;
    let previous = parent.insert(last.clone(), subtree);
    debug!(path = %path, replaced = previous.is_some(), "installed subtree");
    Ok(previous)
}

/// Walk `segments` from `root`, creating empty containers where keys are
/// absent, and return the container at the end of the walk.
pub fn ensure_container<'a>(root: &'a mut Node, segments: &[String]) -> MergeResult<&'a mut Container> {
    let mut walked = KeyPath::root();
    let mut node = root;
    for segment in segments {
        let children = match node {
            Node::Container(children) => children,
            Node::Leaf(leaf) => return Err(conflict(&walked, leaf)),
        };
        if !children.contains_key(segment) {
            debug!(path = %walked.child(segment.as_str()), "created container");
        }
        node = children
            .entry(segment.clone())
            .or_insert_with(Node::empty_container);
        walked = walked.child(segment.as_str());
    }
    match node {
        Node::Container(children) => Ok(children),
        Node::Leaf(leaf) => Err(conflict(&walked, leaf)),
    }
}

fn conflict(path: &KeyPath, leaf: &Leaf) -> MergeError {
    let path = if path.is_root() {
        "<root>".to_string()
    } else {
        path.to_string()
    };
    MergeError::PathConflict {
        path,
        found: leaf.kind(),
    }
}
