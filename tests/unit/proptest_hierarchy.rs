//! Property-based tests for hierarchy normalization
//!
//! Uses proptest to verify properties that should hold for all inputs.

use coursesync::core::models::QualifiedName;
use coursesync::core::services::{HierarchyEntry, HierarchyError, normalize};
use proptest::prelude::*;
use std::collections::HashMap;

/// Random forest: every task's parent, if any, comes earlier
fn forest() -> impl Strategy<Value = HashMap<String, HierarchyEntry>> {
    prop::collection::vec((any::<prop::sample::Index>(), any::<bool>(), " ?[a-z]{1,6} ?"), 1..40).prop_map(
        |nodes| {
            nodes
                .into_iter()
                .enumerate()
                .map(|(i, (parent, has_parent, title))| {
                    let parent = (i > 0 && has_parent).then(|| parent.index(i).to_string());
                    (i.to_string(), HierarchyEntry::new(parent.as_deref(), &title))
                })
                .collect()
        },
    )
}

proptest! {
    /// A name is the parent's name extended by the trimmed title
    #[test]
    fn name_extends_parent(entries in forest()) {
        let hierarchy = normalize(&entries).unwrap();
        prop_assert_eq!(hierarchy.len(), entries.len());

        for (id, entry) in &entries {
            let expected = match &entry.parent_id {
                Some(parent) => hierarchy.name(parent).unwrap().child(&entry.title),
                None => QualifiedName::root(&entry.title),
            };
            prop_assert_eq!(hierarchy.name(id), Some(&expected));
            prop_assert_eq!(
                hierarchy.name(id).unwrap().segments().last().map(String::as_str),
                Some(entry.title.trim())
            );
        }
    }

    /// Normalizing twice gives the same names
    #[test]
    fn normalization_is_deterministic(entries in forest()) {
        let first = normalize(&entries).unwrap();
        let second = normalize(&entries).unwrap();
        for id in entries.keys() {
            prop_assert_eq!(first.name(id), second.name(id));
        }
    }

    /// Pointing a root at one of its descendants is always detected
    #[test]
    fn back_edge_is_a_cycle(mut entries in forest(), pick in any::<prop::sample::Index>()) {
        let len = entries.len();
        let leaf = pick.index(len);

        // walk up from the leaf to its root and close the loop
        let mut root = leaf.to_string();
        while let Some(parent) = entries[&root].parent_id.clone() {
            root = parent;
        }
        entries.get_mut(&root).unwrap().parent_id = Some(leaf.to_string());

        let cyclic = matches!(normalize(&entries), Err(HierarchyError::Cycle { .. }));
        prop_assert!(cyclic);
    }
}
