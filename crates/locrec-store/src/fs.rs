//! Filesystem-backed document store.

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use locrec_types::Document;

use crate::codec::{decode, encode, DEFAULT_INDENT};
use crate::error::{StoreError, StoreResult, Unavailable};
use crate::traits::DocumentStore;

/// Reads and writes UTF-8 JSON files.
///
/// Saves go to a temporary file next to the destination which is then renamed
/// over it, so an interrupted run leaves either the old or the new file. A
/// symlinked destination is written through to the file it points at, and an
/// existing file keeps its permissions.
#[derive(Clone, Debug)]
pub struct FsDocumentStore {
    indent: usize,
}

impl FsDocumentStore {
    /// Create a store writing with the default indentation.
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    /// Create a store writing with `indent` spaces per level.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Configured indentation width.
    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for FsDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for FsDocumentStore {
    fn load(&self, path: &Path) -> StoreResult<Document> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => Unavailable::NotFound,
                _ => Unavailable::Unreadable(e.to_string()),
            };
            StoreError::unavailable(path, reason)
        })?;
        let document = decode(&text)
            .map_err(|e| StoreError::unavailable(path, Unavailable::Malformed(e.to_string())))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(document)
    }

    fn save(&self, path: &Path, document: &Document) -> StoreResult<()> {
        let text = encode(document, self.indent)?;
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dest = match std::fs::canonicalize(path) {
            Ok(real) => real,
            Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(write_err(e)),
        };
        let permissions = std::fs::metadata(&dest).ok().map(|m| m.permissions());

        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(text.as_bytes()).map_err(write_err)?;
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions).map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&dest).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), bytes = text.len(), "saved document");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
