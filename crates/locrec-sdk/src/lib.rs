//! High-level API for locrec.
//!
//! Ties configuration, storage, diff, and merge together. A [`Reconciler`]
//! owns one [`ReconcilerConfig`] and one document store, and runs each
//! operation over every selected target independently: one locale failing
//! never stops the others.

pub mod config;
pub mod error;
pub mod outcome;
pub mod reconciler;

pub use config::ReconcilerConfig;
pub use error::{SdkError, SdkResult};
pub use outcome::{Applied, GraftReport, TargetOutcome};
pub use reconciler::{FragmentSource, MergeRequest, Reconciler};

// Re-export key types
pub use locrec_diff::{DiffReport, DrillDown};
pub use locrec_merge::BackfillReport;
pub use locrec_types::{Document, KeyPath, Node};
