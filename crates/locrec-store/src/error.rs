use std::path::PathBuf;

/// Why a document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unavailable {
    /// Nothing exists at the path.
    #[error("file not found")]
    NotFound,

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("unreadable: {0}")]
    Unreadable(String),

    /// The content is not a valid JSON document.
    #[error("malformed JSON: {0}")]
    Malformed(String),
}

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A document does not exist or could not be parsed.
    #[error("document unavailable: {}: {reason}", path.display())]
    DocumentUnavailable { path: PathBuf, reason: Unavailable },

    /// The in-memory tree could not be rendered as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing a document back to storage failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Shorthand for a [`StoreError::DocumentUnavailable`].
    pub fn unavailable(path: impl Into<PathBuf>, reason: Unavailable) -> Self {
        StoreError::DocumentUnavailable {
            path: path.into(),
            reason,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
