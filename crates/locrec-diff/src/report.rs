//! Missing-key reports: what the baseline has that a target lacks.
//!
//! The raw difference is grouped by top-level segment so an operator can see
//! where coverage is weakest. One designated collection (by default
//! `seoPages.pages`) is large enough to deserve its own breakdown, keyed by the
//! segment directly below it.

use std::collections::BTreeMap;

use serde::Serialize;

use locrec_types::path::SEPARATOR;
use locrec_types::{Document, KeyPath, Node};

use crate::key_set::key_set;

/// Knobs for [`diff_documents`].
#[derive(Clone, Debug, Default)]
pub struct DiffOptions {
    /// Collection whose missing keys are also counted per item.
    pub drill_down: Option<KeyPath>,
}

/// Grouped result of comparing one target against the baseline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiffReport {
    /// Number of keys in the baseline.
    pub baseline_keys: usize,
    /// Keys present in the baseline but absent from the target, sorted.
    pub missing: Vec<String>,
    /// Missing-key count per top-level segment.
    pub groups: BTreeMap<String, usize>,
    /// Per-item counts for the designated collection, if any are missing.
    pub drill_down: Option<DrillDown>,
    /// Share of baseline keys present in the target, in `0.0..=1.0`.
    pub coverage: f64,
}

/// Missing-key counts for the items of one nested collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrillDown {
    /// Dotted path of the collection.
    pub collection: String,
    /// Missing-key count per item id.
    pub items: BTreeMap<String, usize>,
}

impl DiffReport {
    /// Returns `true` if the target covers every baseline key.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing keys.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

/// Keys in `baseline` that `target` lacks, sorted lexicographically.
pub fn missing_keys(baseline: &Node, target: &Node) -> Vec<String> {
    let target_keys = key_set(target);
    key_set(baseline)
        .into_iter()
        .filter(|key| !target_keys.contains(key))
        .collect()
}

/// Compare `target` against `baseline` and group what is missing.
pub fn diff_documents(baseline: &Document, target: &Document, options: &DiffOptions) -> DiffReport {
    let baseline_keys = key_set(baseline.root()).len();
    let missing = missing_keys(baseline.root(), target.root());

    let mut groups: BTreeMap<String, usize> = BTreeMap::new();
    for key in &missing {
        let top = key.split(SEPARATOR).next().unwrap_or(key);
        *groups.entry(top.to_string()).or_default() += 1;
    }

    let drill_down = options
        .drill_down
        .as_ref()
        .and_then(|collection| drill_down(&missing, collection));

    let coverage = if baseline_keys == 0 {
        1.0
    } else {
        1.0 - missing.len() as f64 / baseline_keys as f64
    };

    DiffReport {
        baseline_keys,
        missing,
        groups,
        drill_down,
        coverage,
    }
}

fn drill_down(missing: &[String], collection: &KeyPath) -> Option<DrillDown> {
    let depth = collection.len();
    let mut items: BTreeMap<String, usize> = BTreeMap::new();
    for key in missing {
        let segments: Vec<&str> = key.split(SEPARATOR).collect();
        let under_collection = segments.len() > depth
            && segments[..depth]
                .iter()
                .zip(collection.segments())
                .all(|(a, b)| *a == b.as_str());
        if under_collection {
            *items.entry(segments[depth].to_string()).or_default() += 1;
        }
    }
    if items.is_empty() {
        return None;
    }
    Some(DrillDown {
        collection: collection.to_string(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use locrec_types::Leaf;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from(value)
    }

    fn pages_options() -> DiffOptions {
        DiffOptions {
            drill_down: Some(KeyPath::parse("seoPages.pages").unwrap()),
        }
    }

    #[test]
    fn concrete_single_missing_key() {
        let baseline = doc(json!({"a": {"b": 1, "c": 2}}));
        let target = doc(json!({"a": {"b": 1}}));

        let report = diff_documents(&baseline, &target, &DiffOptions::default());
        assert_eq!(report.missing, vec!["a.c"]);
        assert_eq!(report.groups, BTreeMap::from([("a".to_string(), 1)]));
        assert_eq!(report.drill_down, None);
        assert_eq!(report.baseline_keys, 3);
    }

    #[test]
    fn values_are_ignored() {
        let baseline = doc(json!({"a": "English", "b": {"c": 1}}));
        let target = doc(json!({"a": "Français", "b": {"c": "different type"}}));
        assert!(diff_documents(&baseline, &target, &DiffOptions::default()).is_complete());
    }

    #[test]
    fn extra_target_keys_do_not_count() {
        let baseline = doc(json!({"a": 1}));
        let target = doc(json!({"a": 1, "stale": {"x": 2}}));
        let report = diff_documents(&baseline, &target, &DiffOptions::default());
        assert!(report.is_complete());
        assert_eq!(report.coverage, 1.0);
    }

    #[test]
    fn missing_container_reports_all_descendants() {
        let baseline = doc(json!({"nav": {"home": "Home", "menu": {"open": "Open"}}}));
        let target = doc(json!({}));
        let report = diff_documents(&baseline, &target, &DiffOptions::default());
        assert_eq!(
            report.missing,
            vec!["nav", "nav.home", "nav.menu", "nav.menu.open"]
        );
        assert_eq!(report.groups["nav"], 4);
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn output_is_sorted() {
        let baseline = doc(json!({"z": 1, "b": 2, "a": {"y": 1, "c": 2}}));
        let report = diff_documents(&baseline, &doc(json!({})), &DiffOptions::default());
        let mut sorted = report.missing.clone();
        sorted.sort();
        assert_eq!(report.missing, sorted);
    }

    #[test]
    fn groups_by_top_level_segment() {
        let baseline = doc(json!({
            "nav": {"home": "Home", "about": "About"},
            "footer": {"copyright": "c"},
            "hero": "h"
        }));
        let target = doc(json!({"nav": {"home": "Accueil"}, "hero": "h"}));

        let report = diff_documents(&baseline, &target, &DiffOptions::default());
        assert_eq!(report.missing_count(), 3);
        assert_eq!(
            report.groups,
            BTreeMap::from([("footer".to_string(), 2), ("nav".to_string(), 1)])
        );
    }

    #[test]
    fn drill_down_counts_per_page() {
        let baseline = doc(json!({
            "seoPages": {
                "hub": "Hub",
                "pages": {
                    "pcr": {"title": "PCR", "intro": "i"},
                    "kraft": {"title": "Kraft", "faq": {"q1": "?"}}
                }
            }
        }));
        let target = doc(json!({
            "seoPages": {
                "pages": {
                    "pcr": {"title": "PCR"}
                }
            }
        }));

        let report = diff_documents(&baseline, &target, &pages_options());
        assert_eq!(report.groups["seoPages"], 6);

        let drill = report.drill_down.expect("pages drill-down");
        assert_eq!(drill.collection, "seoPages.pages");
        assert_eq!(
            drill.items,
            BTreeMap::from([("kraft".to_string(), 4), ("pcr".to_string(), 1)])
        );
    }

    #[test]
    fn collection_key_itself_is_not_an_item() {
        let baseline = doc(json!({"seoPages": {"pages": {"x": {"t": 1}}}}));
        let target = doc(json!({"seoPages": {}}));
        let report = diff_documents(&baseline, &target, &pages_options());
        assert!(report.missing.contains(&"seoPages.pages".to_string()));
        let drill = report.drill_down.unwrap();
        assert_eq!(drill.items, BTreeMap::from([("x".to_string(), 2)]));
    }

    #[test]
    fn no_drill_down_when_collection_complete() {
        let baseline = doc(json!({"seoPages": {"pages": {"x": 1}}, "nav": 1}));
        let target = doc(json!({"seoPages": {"pages": {"x": 1}}}));
        let report = diff_documents(&baseline, &target, &pages_options());
        assert_eq!(report.missing, vec!["nav"]);
        assert!(report.drill_down.is_none());
    }

    #[test]
    fn report_serializes_to_json() {
        let baseline = doc(json!({"a": {"b": 1, "c": 2}}));
        let target = doc(json!({"a": {"b": 1}}));
        let report = diff_documents(&baseline, &target, &DiffOptions::default());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["missing"], json!(["a.c"]));
        assert_eq!(value["groups"], json!({"a": 1}));
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            Just(Node::Leaf(Leaf::Null)),
            "[a-z]{0,6}".prop_map(Node::string),
        ];
        let tree = leaf.prop_recursive(4, 48, 5, |inner| {
            prop::collection::vec(("[a-z]{1,3}", inner), 0..5)
                .prop_map(|entries| Node::Container(entries.into_iter().collect()))
        });
        prop::collection::vec(("[a-z]{1,3}", tree), 0..5)
            .prop_map(|entries| Node::Container(entries.into_iter().collect()))
    }

    fn remove_path(root: &mut Node, path: &str) {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last().unwrap();
        let mut node = root;
        for segment in parents {
            node = node.as_container_mut().unwrap().get_mut(*segment).unwrap();
        }
        node.as_container_mut().unwrap().shift_remove(*last);
    }

    proptest! {
        #[test]
        fn self_diff_is_empty(root in arb_node()) {
            prop_assert!(missing_keys(&root, &root).is_empty());
        }

        #[test]
        fn removing_a_key_reports_it(root in arb_node(), pick in any::<prop::sample::Index>()) {
            let keys: Vec<String> = key_set(&root).into_iter().collect();
            prop_assume!(!keys.is_empty());
            let victim = &keys[pick.index(keys.len())];

            let mut target = root.clone();
            remove_path(&mut target, victim);

            let missing = missing_keys(&root, &target);
            prop_assert!(missing.contains(victim));
            let victim_prefix = format!("{victim}.");
            prop_assert!(missing.iter().all(|k| k == victim || k.starts_with(&victim_prefix)));
        }

        #[test]
        fn superset_target_covers_baseline(root in arb_node(), extra in "[a-z]{4,6}") {
            let mut target = root.clone();
            if let Node::Container(children) = &mut target {
                children.insert(format!("extra{extra}"), Node::string("x"));
            }
            prop_assert!(missing_keys(&root, &target).is_empty());
        }
    }
}
