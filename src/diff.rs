//! Structural diff between a snapshot and a live dependency tree.
//!
//! [`diff`] produces a parallel tree over the union of both sides' packages;
//! [`is_zero_at`] decides whether a whole subtree is invisible at a given
//! severity threshold, which the renderer uses to suppress clean subtrees.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{DependencyNode, DiffNode, Severity};
use crate::version::severity_of;

/// Recursively diff two trees. Either side may be absent (package added or
/// removed); an absent side contributes `""` as its version and no children.
///
/// Pure function of its inputs. Child keys are the union of both sides',
/// ordered lexicographically, so output is reproducible.
pub fn diff(a: Option<&DependencyNode>, b: Option<&DependencyNode>) -> DiffNode {
    let a_version = a.map(|n| n.version.clone()).unwrap_or_default();
    let b_version = b.map(|n| n.version.clone()).unwrap_or_default();

    let names: BTreeSet<&String> = a
        .iter()
        .flat_map(|n| n.dependencies.keys())
        .chain(b.iter().flat_map(|n| n.dependencies.keys()))
        .collect();

    let dependencies: BTreeMap<String, DiffNode> = names
        .into_iter()
        .map(|name| {
            let sub_a = a.and_then(|n| n.dependencies.get(name));
            let sub_b = b.and_then(|n| n.dependencies.get(name));
            (name.clone(), diff(sub_a, sub_b))
        })
        .collect();

    DiffNode {
        versions: (a_version, b_version),
        dependencies,
    }
}

/// Severity of a single diff node's own version transition.
pub fn node_severity(node: &DiffNode) -> Severity {
    severity_of(&node.versions.0, &node.versions.1)
}

/// True when a severity is visible at the given threshold.
pub fn clears_threshold(severity: Severity, level: Severity) -> bool {
    match level {
        // The floor admits only exact equality.
        Severity::None | Severity::Patch => severity != Severity::None,
        _ => severity >= level,
    }
}

/// True iff this node and every descendant sit strictly below `level`.
///
/// At the `Patch` floor only byte-identical versions count as zero; at
/// `Minor`, patch bumps are also invisible; at `Major`, everything short of a
/// major bump is.
pub fn is_zero_at(node: &DiffNode, level: Severity) -> bool {
    !clears_threshold(node_severity(node), level)
        && node.dependencies.values().all(|sub| is_zero_at(sub, level))
}
