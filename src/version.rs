//! Version delta classification on top of the `semver` crate.

use semver::Version;

use crate::models::Severity;

/// Classify the gap between two version strings.
///
/// Byte-identical strings are [`Severity::None`] without parsing. A missing
/// (empty) or unparseable side is [`Severity::Major`]: an added, removed, or
/// unintelligible package is always a major-level event.
pub fn severity_of(a: &str, b: &str) -> Severity {
    if a == b {
        return Severity::None;
    }

    let (va, vb) = match (Version::parse(a), Version::parse(b)) {
        (Ok(va), Ok(vb)) => (va, vb),
        _ => return Severity::Major,
    };

    if va.major != vb.major {
        Severity::Major
    } else if va.minor != vb.minor {
        Severity::Minor
    } else {
        // Patch, pre-release, or build metadata difference.
        Severity::Patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_none() {
        assert_eq!(severity_of("1.2.3", "1.2.3"), Severity::None);
        assert_eq!(severity_of("", ""), Severity::None);
    }

    #[test]
    fn test_patch_bump() {
        assert_eq!(severity_of("0.0.0", "0.0.1"), Severity::Patch);
        assert_eq!(severity_of("1.2.3", "1.2.4"), Severity::Patch);
    }

    #[test]
    fn test_minor_bump() {
        assert_eq!(severity_of("0.1.0", "0.2.0"), Severity::Minor);
        assert_eq!(severity_of("1.2.3", "1.3.0"), Severity::Minor);
    }

    #[test]
    fn test_major_bump() {
        assert_eq!(severity_of("1.0.0", "2.0.0"), Severity::Major);
    }

    #[test]
    fn test_missing_side_is_major() {
        assert_eq!(severity_of("", "1.0.0"), Severity::Major);
        assert_eq!(severity_of("1.0.0", ""), Severity::Major);
    }

    #[test]
    fn test_unparseable_is_major() {
        assert_eq!(severity_of("not-a-version", "1.0.0"), Severity::Major);
    }

    #[test]
    fn test_prerelease_difference_is_patch() {
        assert_eq!(severity_of("1.2.3-alpha.1", "1.2.3-alpha.2"), Severity::Patch);
    }
}
