//! Per-package license discovery.
//!
//! Declared metadata wins; packages that declare nothing get a README/LICENSE
//! file sniff; packages with no evidence at all are `UNKNOWN`. Filesystem
//! errors during the sniff are swallowed — license discovery is best-effort
//! and a missing file is simply absent evidence.

use std::collections::BTreeSet;
use std::path::Path;

use crate::license::content::recognize;
use crate::license::normalize::expand;
use crate::models::{LicenseTree, LicenseValue, PackageMeta};
use crate::traverse::traverse;

/// A single declared entry before normalization: a raw string, or an
/// unrecognized shape that can only become `UNKNOWN`.
enum Declared {
    Raw(String),
    Unrecognized,
}

fn flatten_value(value: &LicenseValue, out: &mut Vec<Declared>) {
    match value {
        LicenseValue::Single(s) => {
            if !s.trim().is_empty() {
                out.push(Declared::Raw(s.clone()));
            }
        }
        LicenseValue::Typed { kind } => match kind {
            Some(k) if !k.trim().is_empty() => out.push(Declared::Raw(k.clone())),
            _ => out.push(Declared::Unrecognized),
        },
        LicenseValue::List(items) => {
            for item in items {
                flatten_value(item, out);
            }
        }
        LicenseValue::Unknown(value) => {
            if !value.is_null() {
                out.push(Declared::Unrecognized);
            }
        }
    }
}

/// Collect declared entries from the first populated metadata field, checking
/// the canonical `license` field and its historical spellings in order.
fn declared_licenses(meta: &PackageMeta) -> Vec<Declared> {
    let fields = [&meta.license, &meta.licenses, &meta.licence, &meta.licences];
    for field in fields.into_iter().filter_map(Option::as_ref) {
        let mut out = Vec::new();
        flatten_value(field, &mut out);
        if !out.is_empty() {
            return out;
        }
    }
    Vec::new()
}

/// Run the content recognizer over the package's embedded readme text and
/// then over README/LICENSE-named files in the package directory, in
/// directory order. First match wins; unreadable files are skipped.
fn sniff_files(meta: &PackageMeta, dir: Option<&Path>) -> Option<&'static str> {
    if let Some(readme) = &meta.readme {
        if let Some(id) = recognize(readme) {
            return Some(id);
        }
    }

    let entries = std::fs::read_dir(dir?).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !name.contains("readme") && !name.contains("license") {
            continue;
        }
        let Ok(contents) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        if let Some(id) = recognize(&contents) {
            return Some(id);
        }
    }
    None
}

/// Guess a package's licenses from its metadata and, when available, its
/// directory on disk. The result is deduplicated, sorted, and never empty:
/// a package with no evidence yields `["UNKNOWN"]`.
pub fn guess(meta: &PackageMeta, dir: Option<&Path>) -> Vec<String> {
    let mut declared = declared_licenses(meta);

    if declared.is_empty() {
        if let Some(id) = sniff_files(meta, dir) {
            declared.push(Declared::Raw(id.to_string()));
        }
    }

    if declared.is_empty() {
        return vec!["UNKNOWN".to_string()];
    }

    let mut licenses = BTreeSet::new();
    for entry in declared {
        let canonical = match entry {
            Declared::Raw(raw) => expand(&raw),
            Declared::Unrecognized => vec!["UNKNOWN".to_string()],
        };
        for id in canonical {
            // The generic BSD bucket can sometimes be refined from the
            // package's own license file.
            if id == "BSD" {
                if let Some(found @ ("BSD-2-Clause" | "BSD-3-Clause")) = sniff_files(meta, dir) {
                    licenses.insert(found.to_string());
                    continue;
                }
            }
            licenses.insert(id);
        }
    }

    licenses.into_iter().collect()
}

/// Build the license tree for the installed tree rooted at `dir`.
pub fn license_tree(dir: &Path) -> Option<LicenseTree> {
    traverse(dir, &|meta, pkg_dir, dependencies| LicenseTree {
        licenses: guess(meta, Some(pkg_dir)),
        dependencies,
    })
}
