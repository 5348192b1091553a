//! Walks an installed `node_modules` tree, invoking a callback per package.
//!
//! The callback receives the parsed `package.json`, the package directory,
//! and the already-built child results, and returns whatever per-node payload
//! the caller wants (a version for diffing, a license leaf for auditing).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::{DependencyNode, PackageMeta};

/// Parse `<dir>/package.json`. A missing or unparseable descriptor means the
/// directory does not contribute a package.
pub fn read_package_meta(dir: &Path) -> Option<PackageMeta> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    serde_json::from_str(&content).ok()
}

/// List installed sub-packages of `dir`, i.e. the entries of
/// `<dir>/node_modules` minus the `.bin` shim directory. Scoped packages
/// (`@scope/name`) live one level deeper and are flattened to their full
/// name. An unreadable `node_modules` means no sub-packages.
fn installed_packages(dir: &Path) -> Vec<(String, PathBuf)> {
    let modules = dir.join("node_modules");
    let entries = match std::fs::read_dir(&modules) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut packages = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ".bin" {
            continue;
        }
        if let Some(scope) = name.strip_prefix('@').map(str::to_string) {
            if let Ok(scoped) = std::fs::read_dir(entry.path()) {
                for sub in scoped.flatten() {
                    let sub_name = sub.file_name().to_string_lossy().into_owned();
                    packages.push((format!("@{}/{}", scope, sub_name), sub.path()));
                }
            }
            continue;
        }
        packages.push((name, entry.path()));
    }
    packages
}

/// Recursively traverse the installed tree rooted at `dir`, building one `T`
/// per package bottom-up. Returns `None` when `dir` holds no readable
/// `package.json` (the subtree is omitted, not an error).
pub fn traverse<T>(
    dir: &Path,
    visit: &impl Fn(&PackageMeta, &Path, BTreeMap<String, T>) -> T,
) -> Option<T> {
    let meta = read_package_meta(dir)?;

    let mut children = BTreeMap::new();
    for (name, sub_dir) in installed_packages(dir) {
        if let Some(sub) = traverse(&sub_dir, visit) {
            children.insert(name, sub);
        }
    }

    Some(visit(&meta, dir, children))
}

/// Build the version tree used by `manifest` and `check`.
pub fn dependency_tree(dir: &Path) -> Option<DependencyNode> {
    traverse(dir, &|meta, _, dependencies| DependencyNode {
        version: meta.version.clone().unwrap_or_default(),
        dependencies,
    })
}

/// The project's own package name, for the report's root line.
pub fn root_package_name(dir: &Path) -> String {
    read_package_meta(dir)
        .and_then(|meta| meta.name)
        .unwrap_or_else(|| "@".to_string())
}
