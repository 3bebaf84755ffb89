// src/args.rs
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Root set used when no paths are given: the standard source layout
/// relative to the tools directory.
pub const DEFAULT_ROOTS: &[&str] = &[
    "../../src/exec",
    "../../src/demo",
    "../../src/incl",
    "../../src/lib",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "ctally",
    version,
    about = "Tally total/blank/comment/code lines across C source trees"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Abort on the first unreadable file instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Root directories to walk (defaults to the standard source layout)
    pub roots: Vec<PathBuf>,
}

impl Args {
    /// Resolve the effective root set.
    pub fn resolve_roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
        } else {
            self.roots.clone()
        }
    }
}
