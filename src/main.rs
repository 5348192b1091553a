//! `dep-freezr` — snapshot an installed dependency tree, detect version
//! drift, and audit licenses.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Traverse the installed tree ([`traverse`]).
//! 3. `manifest`: serialize the tree to a snapshot file ([`snapshot`]).
//! 4. `check`: diff the snapshot against the live tree ([`diff`]) and render
//!    drift at the requested severity ([`report::drift`]); exit `1` on drift.
//! 5. `licenses`: guess each package's licenses ([`license::guess`]), mark
//!    the tree against the allow-list ([`license::mark`]), and render the
//!    packages needing attention ([`report::licenses`]).

mod cli;
mod config;
mod diff;
mod license;
mod models;
mod report;
mod snapshot;
mod traverse;
mod version;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Command};
use config::load_config;
use diff::{diff, is_zero_at};
use license::guess::license_tree;
use license::mark::mark;
use models::Severity;
use traverse::{dependency_tree, root_package_name};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Manifest { path, manifest } => cmd_manifest(&resolve(path), manifest),
        Command::Check {
            path,
            manifest,
            severity,
        } => cmd_check(&resolve(path), manifest, severity.into()),
        Command::Licenses {
            path,
            allow,
            config,
            verbose,
        } => cmd_licenses(&resolve(path), allow, config, verbose),
    }
}

fn resolve(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}

fn manifest_path(project: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| project.join(snapshot::MANIFEST_FILE))
}

fn cmd_manifest(path: &Path, manifest: Option<PathBuf>) -> Result<()> {
    let Some(tree) = dependency_tree(path) else {
        eprintln!("No package.json found in {}", path.display());
        std::process::exit(1);
    };

    let manifest = manifest_path(path, manifest);
    if let Err(err) = snapshot::save_new(&manifest, &tree) {
        eprintln!("{} {}", "✗".red(), err);
        std::process::exit(1);
    }

    println!("{} wrote {}", "✓".green(), manifest.display());
    Ok(())
}

fn cmd_check(path: &Path, manifest: Option<PathBuf>, severity: Severity) -> Result<()> {
    let baseline = snapshot::load(&manifest_path(path, manifest))?;

    let Some(live) = dependency_tree(path) else {
        eprintln!("No package.json found in {}", path.display());
        std::process::exit(1);
    };

    let d = diff(Some(&baseline), Some(&live));
    if is_zero_at(&d, severity) {
        println!("{}", "OK".green());
        return Ok(());
    }

    println!("{}", "There are differing versions installed".red());
    report::drift::render(&d, &root_package_name(path), severity);
    std::process::exit(1);
}

fn cmd_licenses(
    path: &Path,
    allow: Vec<String>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let allow: BTreeSet<String> = if allow.is_empty() {
        load_config(path, config.as_deref())?.allow_set()
    } else {
        allow.into_iter().collect()
    };

    let Some(tree) = license_tree(path) else {
        eprintln!("No package.json found in {}", path.display());
        std::process::exit(1);
    };

    let marked = mark(&tree, &allow);
    report::licenses::render(&marked, &root_package_name(path), &allow, verbose);
    Ok(())
}
