// crates/engine/src/config.rs
use std::path::PathBuf;

/// Runtime configuration for a classification run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Root directories to walk, in order. Every entry must exist and be a
    /// directory; validation happens before any file is counted.
    pub roots: Vec<PathBuf>,
    /// Abort on the first per-file error instead of collecting and
    /// continuing.
    pub strict: bool,
}

impl Config {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            strict: false,
        }
    }
}
