// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod classify;
pub mod config;
pub mod counts;
pub mod error;
pub mod filesystem;
pub mod processor;

use crate::config::Config;
use crate::counts::Counters;
use crate::error::{EngineError, Result};

/// Outcome of a classification run: aggregated counts plus any per-file or
/// traversal errors that were skipped along the way.
#[derive(Debug, Default)]
pub struct RunResult {
    pub counts: Counters,
    /// Number of files successfully tallied.
    pub files: usize,
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Run the line classification engine over `config.roots`.
///
/// The walk is a sequential depth-first traversal in deterministic order.
/// Root validation failures are always fatal. In strict mode the first
/// per-file or traversal error aborts the run; otherwise such errors are
/// collected in `RunResult::errors` and counting continues, so a skipped
/// file is never silent.
///
/// # Errors
///
/// Returns an error for a missing or non-directory root, or for any file
/// error in strict mode.
pub fn run(config: &Config) -> Result<RunResult> {
    filesystem::validate_roots(&config.roots)?;

    let (files, mut errors) = filesystem::collect_source_files(&config.roots);
    if config.strict && !errors.is_empty() {
        return Err(errors.remove(0).1);
    }

    let mut result = RunResult {
        errors,
        ..RunResult::default()
    };

    for path in files {
        match processor::tally_file(&path) {
            Ok(counts) => {
                result.counts += counts;
                result.files += 1;
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => result.errors.push((path, e)),
        }
    }

    Ok(result)
}
