//! Key-set extraction: flatten a tree into the set of its dotted paths.
//!
//! Every container below the starting node contributes its own path plus,
//! recursively, the paths of its children. Leaves (lists included) contribute
//! only their own path. The starting node itself is never named: its path is
//! the caller's prefix.
//!
//! Key segments are joined with `.` verbatim, so a key that itself contains a
//! dot is indistinguishable from a nested path. Locale files do not use such
//! keys.

use std::collections::BTreeSet;

use locrec_types::path::join;
use locrec_types::Node;

/// A sorted set of dotted key paths.
pub type KeySet = BTreeSet<String>;

/// Every key path reachable from `root`.
///
/// A leaf root yields the empty set.
pub fn key_set(root: &Node) -> KeySet {
    key_set_with_prefix(root, "")
}

/// Every key path reachable from `node`, each prefixed with `prefix`.
pub fn key_set_with_prefix(node: &Node, prefix: &str) -> KeySet {
    let mut keys = KeySet::new();
    collect(node, prefix, &mut keys);
    keys
}

fn collect(node: &Node, prefix: &str, keys: &mut KeySet) {
    let Node::Container(children) = node else {
        return;
    };
    for (key, child) in children {
        let path = join(prefix, key);
        collect(child, &path, keys);
        keys.insert(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locrec_types::Leaf;
    use proptest::prelude::*;
    use serde_json::json;

    fn keys(value: serde_json::Value) -> Vec<String> {
        key_set(&Node::from(value)).into_iter().collect()
    }

    #[test]
    fn nested_containers_and_leaves() {
        assert_eq!(
            keys(json!({"a": {"b": 1, "c": {"d": "x"}}, "e": true})),
            vec!["a", "a.b", "a.c", "a.c.d", "e"]
        );
    }

    #[test]
    fn empty_container_contributes_itself() {
        assert_eq!(keys(json!({"a": {}})), vec!["a"]);
    }

    #[test]
    fn empty_root_has_no_keys() {
        assert!(keys(json!({})).is_empty());
    }

    #[test]
    fn leaf_root_has_no_keys() {
        assert!(keys(json!("just a string")).is_empty());
        assert!(keys(json!(42)).is_empty());
        assert!(keys(json!(null)).is_empty());
    }

    #[test]
    fn lists_are_not_descended() {
        assert_eq!(keys(json!({"tags": [{"inner": 1}]})), vec!["tags"]);
    }

    #[test]
    fn prefix_is_prepended_but_not_included() {
        let node = Node::from(json!({"title": "t", "faq": {"q": "?"}}));
        let set: Vec<String> = key_set_with_prefix(&node, "seoPages.pages.pcr")
            .into_iter()
            .collect();
        assert_eq!(
            set,
            vec![
                "seoPages.pages.pcr.faq",
                "seoPages.pages.pcr.faq.q",
                "seoPages.pages.pcr.title",
            ]
        );
    }

    #[test]
    fn extraction_does_not_mutate_input() {
        let node = Node::from(json!({"a": {"b": 1}}));
        let before = node.clone();
        let _ = key_set(&node);
        assert_eq!(node, before);
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            Just(Node::Leaf(Leaf::Null)),
            any::<bool>().prop_map(|b| Node::Leaf(Leaf::Bool(b))),
            "[a-z ]{0,8}".prop_map(Node::string),
        ];
        leaf.prop_recursive(4, 48, 5, |inner| {
            prop::collection::vec(("[a-z]{1,3}", inner), 0..5)
                .prop_map(|entries| Node::Container(entries.into_iter().collect()))
        })
    }

    fn count_non_root(node: &Node) -> usize {
        match node {
            Node::Container(children) => {
                children.values().map(|child| 1 + count_non_root(child)).sum()
            }
            Node::Leaf(_) => 0,
        }
    }

    proptest! {
        #[test]
        fn one_entry_per_non_root_node(root in arb_node()) {
            prop_assert_eq!(key_set(&root).len(), count_non_root(&root));
        }

        #[test]
        fn extraction_is_deterministic(root in arb_node()) {
            let reloaded = Node::from(serde_json::Value::from(root.clone()));
            prop_assert_eq!(key_set(&root), key_set(&reloaded));
        }
    }
}
