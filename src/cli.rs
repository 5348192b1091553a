use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Severity;

#[derive(Parser, Debug)]
#[command(
    name = "dep-freezr",
    about = "Snapshot an installed dependency tree, detect version drift, and audit licenses",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a manifest snapshot from the installed dependency tree
    Manifest {
        /// Project path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Manifest file location [default: <PATH>/dep-freezr-manifest.json]
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Check that installed dependencies match the manifest
    Check {
        /// Project path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Manifest file location [default: <PATH>/dep-freezr-manifest.json]
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Lowest version-change level that counts as drift
        #[arg(long, default_value = "patch", value_name = "LEVEL")]
        severity: SeverityArg,
    },

    /// Audit licenses of the installed dependency tree
    Licenses {
        /// Project path to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Allow-listed license identifier (repeatable; overrides config)
        #[arg(long = "allow", value_name = "ID")]
        allow: Vec<String>,

        /// Policy config file [default: ./.dep-freezr/config.toml, fallback ~/.config/dep-freezr/config.toml]
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show all packages, not just those needing attention
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeverityArg {
    /// Any version change counts
    Patch,
    /// Minor and major changes count
    Minor,
    /// Only major changes count
    Major,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Patch => Severity::Patch,
            SeverityArg::Minor => Severity::Minor,
            SeverityArg::Major => Severity::Major,
        }
    }
}
