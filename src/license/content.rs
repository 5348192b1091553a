//! Content-based license recognition.
//!
//! Each reference body is compiled once into a case-insensitive pattern where
//! every run of non-letters becomes a `[\s\S]*` wildcard. License files vary
//! in whitespace, line wrapping, and punctuation but rarely in the words
//! themselves, so this matches robustly without any edit-distance machinery.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Reference bodies, in match order. BSD-3-Clause precedes BSD-2-Clause
/// because the 2-clause pattern also matches 3-clause bodies (the wildcard
/// swallows the third clause), never the other way around.
static REFERENCE_BODIES: &[(&str, &str)] = &[
    ("MIT", include_str!("../../data/mit.txt")),
    ("BSD-3-Clause", include_str!("../../data/bsd3.txt")),
    ("BSD-2-Clause", include_str!("../../data/bsd2.txt")),
    ("ISC", include_str!("../../data/isc.txt")),
];

static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let non_letters = Regex::new("[^A-Za-z]+").expect("static regex");
    REFERENCE_BODIES
        .iter()
        .map(|(id, body)| {
            let trimmed = body.trim_matches(|c: char| !c.is_ascii_alphabetic());
            let pattern = non_letters.replace_all(trimmed, "[\\s\\S]*");
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .expect("reference license pattern");
            (*id, regex)
        })
        .collect()
});

/// Match `text` against the reference bodies in fixed order; first hit wins.
///
/// `None` means no recognition — which is not itself a license claim.
pub fn recognize(text: &str) -> Option<&'static str> {
    PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(id, _)| *id)
}
