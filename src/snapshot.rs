//! Reading and writing the manifest snapshot file.
//!
//! The on-disk shape is exactly `{ "version": ..., "dependencies": { ... } }`
//! per node, pretty-printed with 2-space indentation.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::DependencyNode;

/// Default snapshot filename, created in the project root.
pub const MANIFEST_FILE: &str = "dep-freezr-manifest.json";

/// Load a previously captured snapshot. Missing or malformed files are fatal
/// for the caller — there is nothing meaningful to diff against.
pub fn load(path: &Path) -> Result<DependencyNode> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read manifest {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed manifest {}", path.display()))
}

/// Write a fresh snapshot. Refuses to overwrite an existing baseline.
pub fn save_new(path: &Path, tree: &DependencyNode) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let json = serde_json::to_string_pretty(tree)?;
    std::fs::write(path, json)
        .with_context(|| format!("cannot write manifest {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tree() -> DependencyNode {
        serde_json::from_str(
            r#"{
  "version": "1.0.0",
  "dependencies": {
    "foo": { "version": "2.0.0", "dependencies": {} }
  }
}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        let tree = sample_tree();

        save_new(&path, &tree).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, tree);
    }

    #[test]
    fn test_exact_field_names_and_indentation() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        save_new(&path, &sample_tree()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"version\": \"1.0.0\""));
        assert!(content.contains("\n  \"dependencies\": {"));
        assert!(content.contains("\n    \"foo\": {"));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        save_new(&path, &sample_tree()).unwrap();

        let err = save_new(&path, &sample_tree()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_load_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load(&tmp.path().join(MANIFEST_FILE)).is_err());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_deserializes_without_dependencies_field() {
        let node: DependencyNode = serde_json::from_str(r#"{"version": "0.1.0"}"#).unwrap();
        assert!(node.dependencies.is_empty());
    }
}
