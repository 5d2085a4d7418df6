//! Diff engine for locrec.
//!
//! Compares two documents by the set of key paths they contain. Values are
//! never compared: a key that exists in the baseline and in the target counts
//! as covered no matter what the target holds there.
//!
//! # Key Types
//!
//! - [`key_set`] / [`KeySet`] -- every container and leaf path in a tree
//! - [`missing_keys`] -- sorted `baseline - target` key difference
//! - [`DiffReport`] / [`DrillDown`] -- missing keys grouped for operators

pub mod key_set;
pub mod report;

pub use key_set::{key_set, key_set_with_prefix, KeySet};
pub use report::{diff_documents, missing_keys, DiffOptions, DiffReport, DrillDown};
