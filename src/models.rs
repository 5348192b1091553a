use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of an installed dependency tree: a package's resolved version plus
/// its own installed sub-packages, keyed by name.
///
/// This is also the manifest snapshot shape on disk — field names are part of
/// the file format, do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub version: String,
    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencyNode>,
}

/// One node of a diff tree: the (snapshot, live) version pair and the union of
/// both sides' sub-packages. A missing side is recorded as `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffNode {
    pub versions: (String, String),
    pub dependencies: BTreeMap<String, DiffNode>,
}

/// How far apart two versions are.
///
/// `Ord` follows escalation order, so threshold checks read as
/// `severity < threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    None,
    Patch,
    Minor,
    Major,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::None => write!(f, "none"),
            Severity::Patch => write!(f, "patch"),
            Severity::Minor => write!(f, "minor"),
            Severity::Major => write!(f, "major"),
        }
    }
}

/// One node of a license tree before marking. `licenses` is deduplicated and
/// sorted; a package with no discoverable license carries `["UNKNOWN"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseTree {
    pub licenses: Vec<String>,
    pub dependencies: BTreeMap<String, LicenseTree>,
}

/// A license tree after allow-list marking. `marked` is true only when this
/// node's own licenses intersect the allow-list and every descendant is
/// marked too.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedLicenseTree {
    pub licenses: Vec<String>,
    pub marked: bool,
    pub dependencies: BTreeMap<String, MarkedLicenseTree>,
}

/// The subset of `package.json` this tool reads.
///
/// The four license fields are historical spellings of the same thing; the
/// first populated one wins (see [`crate::license::guess`]).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageMeta {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<LicenseValue>,
    pub licenses: Option<LicenseValue>,
    pub licence: Option<LicenseValue>,
    pub licences: Option<LicenseValue>,
    pub readme: Option<String>,
}

/// The shapes a license declaration takes in the wild: a plain string, a
/// `{ "type": ... }` object, an array of either, or garbage. Garbage
/// normalizes to `UNKNOWN` rather than failing the parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LicenseValue {
    Single(String),
    Typed {
        #[serde(rename = "type")]
        kind: Option<String>,
    },
    List(Vec<LicenseValue>),
    Unknown(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::None < Severity::Patch);
        assert!(Severity::Patch < Severity::Minor);
        assert!(Severity::Minor < Severity::Major);
    }

    #[test]
    fn test_license_value_shapes() {
        let single: LicenseValue = serde_json::from_str(r#""MIT""#).unwrap();
        assert!(matches!(single, LicenseValue::Single(s) if s == "MIT"));

        let typed: LicenseValue = serde_json::from_str(r#"{"type": "ISC"}"#).unwrap();
        assert!(matches!(typed, LicenseValue::Typed { kind: Some(k) } if k == "ISC"));

        let list: LicenseValue = serde_json::from_str(r#"["MIT", {"type": "ISC"}]"#).unwrap();
        assert!(matches!(list, LicenseValue::List(items) if items.len() == 2));

        let garbage: LicenseValue = serde_json::from_str("42").unwrap();
        assert!(matches!(garbage, LicenseValue::Unknown(_)));
    }

    #[test]
    fn test_package_meta_tolerates_extra_fields() {
        let meta: PackageMeta = serde_json::from_str(
            r#"{"name": "foo", "version": "1.0.0", "main": "index.js", "scripts": {}}"#,
        )
        .unwrap();
        assert_eq!(meta.name.as_deref(), Some("foo"));
        assert_eq!(meta.version.as_deref(), Some("1.0.0"));
        assert!(meta.license.is_none());
    }
}
