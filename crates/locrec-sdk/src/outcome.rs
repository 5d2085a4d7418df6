use std::path::PathBuf;

use serde::Serialize;

use crate::error::SdkResult;

/// The result of running one operation against one target document.
#[derive(Debug)]
pub struct TargetOutcome<T> {
    /// Locale identifier of the target.
    pub locale: String,
    /// Where the target document lives.
    pub path: PathBuf,
    /// What happened. Failures are per target.
    pub result: SdkResult<T>,
}

impl<T> TargetOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// A mutation report plus whether the document was written back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Applied<T> {
    pub report: T,
    /// `false` for dry runs and for runs that changed nothing.
    pub written: bool,
}

/// What a fragment merge did to one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraftReport {
    /// The target already held a value at the merge path.
    pub replaced: bool,
    /// The target file did not exist and was started from an empty document.
    pub created: bool,
}
