//! License audit rendering.
//!
//! Prints the unmarked part of the tree — packages whose subtree contains
//! something off the allow-list — then a summary table of license usage
//! across the whole tree. With `--verbose`, marked subtrees are shown too.

use std::collections::{BTreeMap, BTreeSet};

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::MarkedLicenseTree;

/// One renderable report line.
#[derive(Debug, PartialEq)]
pub struct Row {
    pub depth: usize,
    pub name: String,
    pub licenses: Vec<String>,
    pub marked: bool,
}

/// Flatten the visible part of a marked license tree into report rows.
/// Marked subtrees are entirely suppressed unless `verbose` is set.
pub fn rows(tree: &MarkedLicenseTree, root_name: &str, verbose: bool) -> Vec<Row> {
    let mut out = Vec::new();
    collect(tree, root_name, 0, verbose, &mut out);
    out
}

fn collect(
    node: &MarkedLicenseTree,
    name: &str,
    depth: usize,
    verbose: bool,
    out: &mut Vec<Row>,
) {
    if node.marked && !verbose {
        return;
    }

    out.push(Row {
        depth,
        name: name.to_string(),
        licenses: node.licenses.clone(),
        marked: node.marked,
    });

    for (sub_name, sub) in &node.dependencies {
        collect(sub, sub_name, depth + 1, verbose, out);
    }
}

/// License → number of packages carrying it, over the whole tree.
pub fn license_counts(tree: &MarkedLicenseTree) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    tally(tree, &mut counts);
    counts
}

fn tally(node: &MarkedLicenseTree, counts: &mut BTreeMap<String, usize>) {
    for license in &node.licenses {
        *counts.entry(license.clone()).or_insert(0) += 1;
    }
    for sub in node.dependencies.values() {
        tally(sub, counts);
    }
}

fn package_count(node: &MarkedLicenseTree) -> usize {
    1 + node.dependencies.values().map(package_count).sum::<usize>()
}

/// Print the license report to stdout.
pub fn render(
    tree: &MarkedLicenseTree,
    root_name: &str,
    allow: &BTreeSet<String>,
    verbose: bool,
) {
    let total = package_count(tree);

    if tree.marked && !verbose {
        println!(
            "{} all {} packages use allow-listed licenses",
            "✓".green(),
            total
        );
    } else {
        for row in rows(tree, root_name, verbose) {
            let licenses: Vec<String> = row
                .licenses
                .iter()
                .map(|l| {
                    if allow.contains(l) {
                        l.green().to_string()
                    } else {
                        l.red().to_string()
                    }
                })
                .collect();
            println!(
                "{}{} {}",
                "  ".repeat(row.depth),
                row.name,
                licenses.join(", ")
            );
        }
    }

    println!();
    render_summary(tree, allow);
}

fn render_summary(tree: &MarkedLicenseTree, allow: &BTreeSet<String>) {
    let counts = license_counts(tree);

    let mut pairs: Vec<(&String, &usize)> = counts.iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Packages").add_attribute(Attribute::Bold),
            Cell::new("Allowed").add_attribute(Attribute::Bold),
        ]);

    for (license, count) in pairs {
        let (mark, color) = if allow.contains(license) {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        table.add_row(vec![
            Cell::new(license),
            Cell::new(count),
            Cell::new(mark).fg(color),
        ]);
    }

    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::mark::mark;
    use crate::models::LicenseTree;

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
    fn test_marked_subtrees_suppressed() {
        let marked = mark(
            &tree(
                &["MIT"],
                &[
                    ("clean", tree(&["MIT"], &[])),
                    ("dirty", tree(&["GPL-3.0"], &[])),
                ],
            ),
            &allow(&["MIT"]),
        );

        let rows = rows(&marked, "app", false);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["app", "dirty"]);
    }

    #[test]
    fn test_verbose_shows_everything() {
        let marked = mark(
            &tree(&["MIT"], &[("clean", tree(&["MIT"], &[]))]),
            &allow(&["MIT"]),
        );
        assert_eq!(rows(&marked, "app", true).len(), 2);
    }

    #[test]
    fn test_fully_marked_tree_has_no_rows() {
        let marked = mark(&tree(&["MIT"], &[]), &allow(&["MIT"]));
        assert!(rows(&marked, "app", false).is_empty());
    }

    #[test]
    fn test_license_counts_cover_whole_tree() {
        let marked = mark(
            &tree(
                &["MIT"],
                &[
                    ("foo", tree(&["MIT"], &[("bar", tree(&["GPL-2.0", "MIT"], &[]))])),
                ],
            ),
            &allow(&["MIT"]),
        );

        let counts = license_counts(&marked);
        assert_eq!(counts["MIT"], 3);
        assert_eq!(counts["GPL-2.0"], 1);
    }
}
