//! Version-drift rendering.
//!
//! One line per visible tree node, indented two spaces per depth level.
//! Nodes whose own change clears the severity threshold get a
//! `old -> new [severity]` annotation; ancestors of such nodes that are
//! themselves unchanged get a plain context line; subtrees that are zero at
//! the threshold are suppressed entirely.

use colored::{ColoredString, Colorize};

use crate::diff::{clears_threshold, is_zero_at, node_severity};
use crate::models::{DiffNode, Severity};

/// One renderable report line.
#[derive(Debug, PartialEq)]
pub enum Row {
    Change {
        depth: usize,
        name: String,
        from: String,
        to: String,
        severity: Severity,
    },
    Context {
        depth: usize,
        name: String,
        version: String,
    },
}

/// Flatten the visible part of a diff tree into report rows.
pub fn rows(diff: &DiffNode, root_name: &str, level: Severity) -> Vec<Row> {
    let mut out = Vec::new();
    collect(diff, root_name, 0, level, &mut out);
    out
}

fn collect(node: &DiffNode, name: &str, depth: usize, level: Severity, out: &mut Vec<Row>) {
    if is_zero_at(node, level) {
        return;
    }

    let severity = node_severity(node);
    if clears_threshold(severity, level) {
        out.push(Row::Change {
            depth,
            name: name.to_string(),
            from: node.versions.0.clone(),
            to: node.versions.1.clone(),
            severity,
        });
    } else {
        out.push(Row::Context {
            depth,
            name: name.to_string(),
            version: node.versions.1.clone(),
        });
    }

    for (sub_name, sub) in &node.dependencies {
        collect(sub, sub_name, depth + 1, level, out);
    }
}

fn paint(text: String, severity: Severity) -> ColoredString {
    match severity {
        Severity::Major => text.red(),
        Severity::Minor => text.yellow(),
        _ => text.cyan(),
    }
}

/// Print the drift report to stdout.
pub fn render(diff: &DiffNode, root_name: &str, level: Severity) {
    for row in rows(diff, root_name, level) {
        match row {
            Row::Change {
                depth,
                name,
                from,
                to,
                severity,
            } => {
                println!(
                    "{}{} {} {}",
                    "  ".repeat(depth),
                    name,
                    paint(format!("{} -> {}", from, to), severity),
                    format!("[{}]", severity).dimmed(),
                );
            }
            Row::Context {
                depth,
                name,
                version,
            } => {
                println!("{}{} {}", "  ".repeat(depth), name, version.dimmed());
            }
        }
    }
}
