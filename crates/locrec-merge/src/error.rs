//! Error types for the merge crate.

/// Errors that can occur while merging into a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// A leaf sits where the merge path needs a container.
    #[error("path conflict at {path}: expected a container, found {found}")]
    PathConflict { path: String, found: &'static str },

    /// The subtree to copy does not exist in the source document.
    #[error("source has no container or value at {path}")]
    SourceMissing { path: String },

    /// A merge needs at least one path segment to name its terminal key.
    #[error("merge path must not be empty")]
    EmptyPath,
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
