// crates/engine/src/filesystem.rs
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::classify::is_source_file;
use crate::error::{EngineError, Result};

/// Check every root before walking.
///
/// A missing or non-directory root is a configuration error and fails the
/// whole run; partial results over a mistyped root would under-count
/// silently.
pub fn validate_roots(roots: &[PathBuf]) -> Result<()> {
    for root in roots {
        let meta = std::fs::metadata(root).map_err(|e| EngineError::InvalidRoot {
            path: root.clone(),
            source: e,
        })?;
        if !meta.is_dir() {
            return Err(EngineError::NotADirectory { path: root.clone() });
        }
    }
    Ok(())
}

/// Depth-first walk of all roots, collecting eligible source files in
/// deterministic name order.
///
/// Directories are traversed but never collected; symlinks are not
/// followed. Traversal failures (e.g. an unreadable subdirectory) are
/// returned alongside the file list rather than dropped.
pub fn collect_source_files(
    roots: &[PathBuf],
) -> (Vec<PathBuf>, Vec<(PathBuf, EngineError)>) {
    let mut files = Vec::new();
    let mut errors = Vec::new();

    for root in roots {
        let walker = WalkDir::new(root).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| root.clone(), std::path::Path::to_path_buf);
                    errors.push((path, EngineError::Walk(e)));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    (files, errors)
}
