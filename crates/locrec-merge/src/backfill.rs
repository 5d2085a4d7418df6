//! Page-presence backfill.
//!
//! For every item of the baseline's pages collection that the target lacks
//! entirely, the whole baseline subtree is copied into the target. An item the
//! target already has is left exactly as it is, even if it is missing fields
//! the baseline has: presence of the item key is enough to skip it.

use serde::Serialize;
use tracing::{debug, info};

use locrec_types::{Document, KeyPath};

use crate::error::{MergeError, MergeResult};
use crate::path_merge::ensure_container;

/// Which pages a backfill copied and which it left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BackfillReport {
    /// Page ids copied from the baseline, sorted.
    pub added: Vec<String>,
    /// Page ids the target already had, sorted.
    pub kept: Vec<String>,
}

impl BackfillReport {
    /// Returns `true` if the target was modified.
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Copy wholly missing items of `collection` from `baseline` into `target`.
///
/// If `target` has no container at `collection`, one is created along the
/// path first.
///
/// # Errors
///
/// - [`MergeError::SourceMissing`] if `baseline` has no container at
///   `collection`.
/// - [`MergeError::PathConflict`] if a leaf in `target` blocks the path.
pub fn backfill_pages(
    baseline: &Document,
    target: &mut Document,
    collection: &KeyPath,
) -> MergeResult<BackfillReport> {
    let source_pages = baseline
        .get_container(collection)
        .ok_or_else(|| MergeError::SourceMissing {
            path: collection.to_string(),
        })?;
    let target_pages = ensure_container(target.root_mut(), collection.segments())?;

    let mut report = BackfillReport::default();
    for (id, page) in source_pages {
        if target_pages.contains_key(id) {
            report.kept.push(id.clone());
        } else {
            debug!(page = %id, "backfilling page");
            target_pages.insert(id.clone(), page.clone());
            report.added.push(id.clone());
        }
    }
    report.added.sort();
    report.kept.sort();

    info!(
        collection = %collection,
        added = report.added.len(),
        kept = report.kept.len(),
        "backfill complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn pages() -> KeyPath {
        KeyPath::parse("seoPages.pages").unwrap()
    }

    #[test]
    fn adds_missing_pages_and_skips_present_ones() {
        let baseline = Document::from(json!({
            "seoPages": {"pages": {
                "x": {"title": "X", "body": "full"},
                "y": {"title": "Y", "body": "full"}
            }}
        }));
        let mut target = Document::from(json!({
            "seoPages": {"pages": {"x": {"title": "stub"}}}
        }));

        let report = backfill_pages(&baseline, &mut target, &pages()).unwrap();
        assert_eq!(report.added, vec!["y"]);
        assert_eq!(report.kept, vec!["x"]);
        assert!(report.changed());
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({"seoPages": {"pages": {
                "x": {"title": "stub"},
                "y": {"title": "Y", "body": "full"}
            }}})
        );
    }

    #[test]
    fn present_pages_are_untouched_even_when_incomplete() {
        let baseline = Document::from(json!({"seoPages": {"pages": {"x": {"a": 1, "b": 2}}}}));
        let mut target = Document::from(json!({"seoPages": {"pages": {"x": {}}}}));
        let before = target.clone();

        let report = backfill_pages(&baseline, &mut target, &pages()).unwrap();
        assert!(!report.changed());
        assert_eq!(target, before);
    }

    #[test]
    fn creates_collection_when_target_lacks_it() {
        let baseline = Document::from(json!({"seoPages": {"pages": {"p": {"t": "T"}}}}));
        let mut target = Document::from(json!({"nav": {"home": "Inicio"}}));

        let report = backfill_pages(&baseline, &mut target, &pages()).unwrap();
        assert_eq!(report.added, vec!["p"]);
        assert_eq!(
            Value::from(target.into_root()),
            json!({"nav": {"home": "Inicio"}, "seoPages": {"pages": {"p": {"t": "T"}}}})
        );
    }

    #[test]
    fn other_target_keys_survive() {
        let baseline = Document::from(json!({"seoPages": {"pages": {"p": 1}}}));
        let mut target = Document::from(json!({"seoPages": {"hub": "Hub", "pages": {}}, "z": 0}));
        backfill_pages(&baseline, &mut target, &pages()).unwrap();
        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({"seoPages": {"hub": "Hub", "pages": {"p": 1}}, "z": 0})
        );
    }

    #[test]
    fn baseline_without_collection_fails() {
        let baseline = Document::from(json!({"seoPages": {}}));
        let mut target = Document::empty();
        let err = backfill_pages(&baseline, &mut target, &pages()).unwrap_err();
        assert_eq!(
            err,
            MergeError::SourceMissing {
                path: "seoPages.pages".into()
            }
        );
        assert_eq!(target, Document::empty());
    }

    #[test]
    fn leaf_in_target_path_conflicts() {
        let baseline = Document::from(json!({"seoPages": {"pages": {"p": 1}}}));
        let mut target = Document::from(json!({"seoPages": "todo"}));
        let err = backfill_pages(&baseline, &mut target, &pages()).unwrap_err();
        assert!(matches!(err, MergeError::PathConflict { ref path, .. } if path == "seoPages"));
    }

    #[test]
    fn second_run_is_a_no_op() {
        let baseline = Document::from(json!({"seoPages": {"pages": {"a": 1, "b": 2}}}));
        let mut target = Document::empty();
        backfill_pages(&baseline, &mut target, &pages()).unwrap();
        let after_first = target.clone();

        let report = backfill_pages(&baseline, &mut target, &pages()).unwrap();
        assert!(!report.changed());
        assert_eq!(report.kept, vec!["a", "b"]);
        assert_eq!(target, after_first);
    }
}
