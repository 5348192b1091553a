//! Canonicalization of free-text license declarations.
//!
//! Two closed tables drive this: a single-license alias table and a composite
//! table for multi-license spellings ("MIT/GPL"). Both are keyed
//! case-insensitively, with a second punctuation-stripped lookup so
//! "Apache 2.0" and "APACHE2.0" land on the same entry. Strings matching
//! neither table pass through unchanged — the caller may want to see the raw
//! identifier rather than a coerced UNKNOWN.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Alias spellings → canonical identifier. Keys are matched case-insensitively
/// and again with everything outside `[A-Za-z0-9]` stripped.
static ALIASES: &[(&str, &str)] = &[
    ("MIT", "MIT"),
    ("MIT License", "MIT"),
    ("The MIT License", "MIT"),
    ("MIT/X11", "MIT"),
    ("X11", "MIT"),
    ("BSD", "BSD"),
    ("BSD*", "BSD"),
    ("BSD License", "BSD"),
    ("BSD-like", "BSD"),
    ("BSD-2-Clause", "BSD-2-Clause"),
    ("BSD 2-Clause", "BSD-2-Clause"),
    ("Simplified BSD", "BSD-2-Clause"),
    ("FreeBSD", "BSD-2-Clause"),
    ("BSD-3-Clause", "BSD-3-Clause"),
    ("BSD 3-Clause", "BSD-3-Clause"),
    ("New BSD", "BSD-3-Clause"),
    ("Modified BSD", "BSD-3-Clause"),
    ("Apache-2.0", "Apache-2.0"),
    ("Apache 2.0", "Apache-2.0"),
    ("Apache2", "Apache-2.0"),
    ("Apache License 2.0", "Apache-2.0"),
    ("Apache License, Version 2.0", "Apache-2.0"),
    ("ASL 2.0", "Apache-2.0"),
    ("ISC", "ISC"),
    ("ISC License", "ISC"),
    ("GPL-2.0", "GPL-2.0"),
    ("GPL 2.0", "GPL-2.0"),
    ("GPLv2", "GPL-2.0"),
    ("GPL v2", "GPL-2.0"),
    ("GNU GPL v2", "GPL-2.0"),
    ("GPL-3.0", "GPL-3.0"),
    ("GPL 3.0", "GPL-3.0"),
    ("GPLv3", "GPL-3.0"),
    ("GPL v3", "GPL-3.0"),
    ("GNU GPL v3", "GPL-3.0"),
    ("LGPL-2.1", "LGPL-2.1"),
    ("LGPLv2.1", "LGPL-2.1"),
    ("LGPL v2.1", "LGPL-2.1"),
    ("LGPL-3.0", "LGPL-3.0"),
    ("LGPLv3", "LGPL-3.0"),
    ("LGPL v3", "LGPL-3.0"),
    ("AGPL-3.0", "AGPL-3.0"),
    ("AGPLv3", "AGPL-3.0"),
    ("MPL-2.0", "MPL-2.0"),
    ("MPL 2.0", "MPL-2.0"),
    ("MPLv2", "MPL-2.0"),
    ("Mozilla Public License 2.0", "MPL-2.0"),
    ("CC0-1.0", "CC0-1.0"),
    ("CC0", "CC0-1.0"),
    ("Public Domain", "CC0-1.0"),
    ("Unlicense", "Unlicense"),
    ("The Unlicense", "Unlicense"),
    ("WTFPL", "WTFPL"),
    ("Zlib", "Zlib"),
    ("zlib/libpng", "Zlib"),
    ("Artistic-2.0", "Artistic-2.0"),
    ("Python-2.0", "Python-2.0"),
    ("UNKNOWN", "UNKNOWN"),
];

/// Known composite spellings → ordered canonical identifiers. This is a
/// closed enumeration, not a parser: separators outside this table fall
/// through to the pass-through path of [`normalize`].
static COMPOSITES: &[(&str, &[&str])] = &[
    ("MIT/GPL", &["MIT", "GPL-2.0"]),
    ("MIT/Apache-2.0", &["MIT", "Apache-2.0"]),
    ("MIT OR Apache-2.0", &["MIT", "Apache-2.0"]),
    ("Apache-2.0/MIT", &["Apache-2.0", "MIT"]),
    ("BSD/MIT", &["BSD", "MIT"]),
    ("MIT/BSD", &["MIT", "BSD"]),
    ("GPL-2.0/LGPL-2.1", &["GPL-2.0", "LGPL-2.1"]),
];

/// Strip everything outside `[A-Za-z0-9]` and uppercase the rest.
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

struct AliasMaps {
    exact: HashMap<String, &'static str>,
    squashed: HashMap<String, &'static str>,
}

static ALIAS_MAPS: LazyLock<AliasMaps> = LazyLock::new(|| {
    let mut exact = HashMap::new();
    let mut squashed = HashMap::new();
    for (alias, canonical) in ALIASES {
        exact.insert(alias.to_uppercase(), *canonical);
        squashed.insert(squash(alias), *canonical);
    }
    AliasMaps { exact, squashed }
});

struct CompositeMaps {
    exact: HashMap<String, &'static [&'static str]>,
    squashed: HashMap<String, &'static [&'static str]>,
}

static COMPOSITE_MAPS: LazyLock<CompositeMaps> = LazyLock::new(|| {
    let mut exact = HashMap::new();
    let mut squashed = HashMap::new();
    for (spelling, canonical) in COMPOSITES {
        exact.insert(spelling.to_uppercase(), *canonical);
        squashed.insert(squash(spelling), *canonical);
    }
    CompositeMaps { exact, squashed }
});

/// Map one raw license string to its canonical identifier.
///
/// Unrecognized strings come back unchanged.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let maps = &*ALIAS_MAPS;

    if let Some(canonical) = maps.exact.get(&trimmed.to_uppercase()) {
        return (*canonical).to_string();
    }
    if let Some(canonical) = maps.squashed.get(&squash(trimmed)) {
        return (*canonical).to_string();
    }
    raw.to_string()
}

/// Map one raw license string to one or more canonical identifiers,
/// expanding known composite spellings.
pub fn expand(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let maps = &*COMPOSITE_MAPS;

    let hit = maps
        .exact
        .get(&trimmed.to_uppercase())
        .or_else(|| maps.squashed.get(&squash(trimmed)));
    if let Some(parts) = hit {
        return parts.iter().map(|p| (*p).to_string()).collect();
    }

    vec![normalize(raw)]
}
