//! Merge engine for locrec.
//!
//! Installs subtrees into target documents without disturbing unrelated keys.
//! All operations mutate a document held by exclusive reference; nothing here
//! touches storage, so a failed merge never reaches disk.
//!
//! # Key Types
//!
//! - [`merge_at_path`] -- install a subtree at a path, creating containers
//! - [`backfill_pages`] / [`BackfillReport`] -- copy wholly missing pages
//! - [`graft`] -- move a located subtree from one document into another
//! - [`MergeError`] -- path conflicts and missing sources

pub mod backfill;
pub mod error;
pub mod graft;
pub mod path_merge;

pub use backfill::{backfill_pages, BackfillReport};
pub use error::{MergeError, MergeResult};
pub use graft::graft;
pub use path_merge::{ensure_container, merge_at_path};
