use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use locrec_types::Document;

use crate::codec::{decode, encode, DEFAULT_INDENT};
use crate::error::{StoreError, StoreResult, Unavailable};
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Documents are kept as serialized text so
/// that saves go through the same codec as the filesystem backend, and so that
/// malformed content can be injected with [`insert_raw`](Self::insert_raw).
pub struct InMemoryDocumentStore {
    files: RwLock<HashMap<PathBuf, String>>,
    indent: usize,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Create an empty store that serializes with `indent` spaces per level.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            indent,
        }
    }

    /// Store raw text at `path`, bypassing the codec.
    pub fn insert_raw(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), text.into());
    }

    /// Raw text currently stored at `path`.
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.files.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn load(&self, path: &Path) -> StoreResult<Document> {
        let text = self
            .raw(path)
            .ok_or_else(|| StoreError::unavailable(path, Unavailable::NotFound))?;
        decode(&text)
            .map_err(|e| StoreError::unavailable(path, Unavailable::Malformed(e.to_string())))
    }

    fn save(&self, path: &Path, document: &Document) -> StoreResult<()> {
        let text = encode(document, self.indent)?;
        self.insert_raw(path, text);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }
}
