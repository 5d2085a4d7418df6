//! Copy a located subtree from one document into another.
//!
//! Used to merge externally translated fragments back into locale files: the
//! fragment's subtree at `source_path` replaces the target's value at
//! `target_path` under path-ensuring merge rules.

use locrec_types::{Document, KeyPath, Node};

use crate::error::{MergeError, MergeResult};
use crate::path_merge::merge_at_path;

/// Install `source`'s subtree at `source_path` into `target` at `target_path`.
///
/// `source_path` may be the root, meaning the whole source document.
/// Returns the value the target previously held at `target_path`.
pub fn graft(
    source: &Document,
    source_path: &KeyPath,
    target: &mut Document,
    target_path: &KeyPath,
) -> MergeResult<Option<Node>> {
    let subtree = source
        .get(source_path)
        .ok_or_else(|| MergeError::SourceMissing {
            path: source_path.to_string(),
        })?;
    merge_at_path(target.root_mut(), target_path, subtree.clone())
}
