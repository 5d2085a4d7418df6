use std::path::Path;

use locrec_types::Document;

use crate::error::StoreResult;

/// Load/save access to localization documents.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the whole document or a
///   [`StoreError::DocumentUnavailable`](crate::StoreError::DocumentUnavailable);
///   there is no partial read.
/// - `save` fully replaces whatever was stored at the path. A failed save
///   leaves the previous content in place.
/// - Loading the same stored bytes twice yields equal documents.
pub trait DocumentStore: Send + Sync {
    /// Read and parse the document stored at `path`.
    fn load(&self, path: &Path) -> StoreResult<Document>;

    /// Serialize `document` and store it at `path`.
    fn save(&self, path: &Path, document: &Document) -> StoreResult<()>;

    /// Check whether anything is stored at `path`.
    fn exists(&self, path: &Path) -> bool;
}
