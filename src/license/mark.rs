//! Allow-list marking over a license tree.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{LicenseTree, MarkedLicenseTree};

/// Post-order marking: a node is marked only when its own licenses intersect
/// the allow-list and every descendant is marked too. A marked subtree is one
/// nothing in which needs attention, so renderers can suppress it whole.
pub fn mark(tree: &LicenseTree, allow: &BTreeSet<String>) -> MarkedLicenseTree {
    let dependencies: BTreeMap<String, MarkedLicenseTree> = tree
        .dependencies
        .iter()
        .map(|(name, sub)| (name.clone(), mark(sub, allow)))
        .collect();

    let subtree_marked = dependencies.values().all(|sub| sub.marked);
    let own_marked = tree.licenses.iter().any(|l| allow.contains(l));

    MarkedLicenseTree {
        licenses: tree.licenses.clone(),
        marked: own_marked && subtree_marked,
        dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(licenses: &[&str], deps: &[(&str, LicenseTree)]) -> LicenseTree {
        LicenseTree {
            licenses: licenses.iter().map(|s| s.to_string()).collect(),
            dependencies: deps
                .iter()
                .map(|(name, sub)| (name.to_string(), sub.clone()))
                .collect(),
        }
    }

    fn allow(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_marked_when_whole_subtree_allowed() {
        let marked = mark(
            &tree(
                &["MIT"],
                &[
                    ("foo", tree(&["BSD-2-Clause"], &[])),
                    ("bar", tree(&["BSD-3-Clause"], &[])),
                ],
            ),
            &allow(&["MIT", "BSD-2-Clause", "BSD-3-Clause"]),
        );
        assert!(marked.marked);
        assert!(marked.dependencies["foo"].marked);
        assert!(marked.dependencies["bar"].marked);
    }

    #[test]
    fn test_disallowed_child_unmarks_ancestors() {
        let marked = mark(
            &tree(&["MIT"], &[("foo", tree(&["GPL"], &[]))]),
            &allow(&["MIT"]),
        );
        assert!(!marked.marked);
        assert!(!marked.dependencies["foo"].marked);
    }

    #[test]
    fn test_leaf_subtree_vacuously_marked() {
        let marked = mark(&tree(&["ISC"], &[]), &allow(&["ISC"]));
        assert!(marked.marked);
    }

    #[test]
    fn test_any_own_license_on_list_suffices() {
        let marked = mark(&tree(&["GPL-2.0", "MIT"], &[]), &allow(&["MIT"]));
        assert!(marked.marked);
    }

    #[test]
    fn test_allowed_child_under_disallowed_parent_stays_marked() {
        let marked = mark(
            &tree(&["UNKNOWN"], &[("foo", tree(&["MIT"], &[]))]),
            &allow(&["MIT"]),
        );
        assert!(!marked.marked);
        assert!(marked.dependencies["foo"].marked);
    }
}
