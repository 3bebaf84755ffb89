// crates/engine/src/processor.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::classify_line;
use crate::counts::Counters;
use crate::error::{EngineError, Result};

/// Tally a single file line by line.
///
/// Lines arrive with the trailing newline already stripped and are trimmed
/// before classification. Any I/O failure, including invalid UTF-8, maps to
/// `FileRead` for this path.
pub fn tally_file(path: &Path) -> Result<Counters> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut counts = Counters::zero();
    for line in reader.lines() {
        let line = line.map_err(|e| EngineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        counts.record(classify_line(&line));
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn tallies_mixed_content() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  // hello\n\nint x = 1;\n").unwrap();

        let counts = tally_file(file.path()).unwrap();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.blank, 1);
        assert_eq!(counts.comment, 1);
        assert_eq!(counts.code, 1);
    }

    #[test]
    fn empty_file_counts_nothing() {
        let file = NamedTempFile::new().unwrap();
        let counts = tally_file(file.path()).unwrap();
        assert!(counts.is_zero());
    }

    #[test]
    fn missing_trailing_newline_still_counts_last_line() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "int a;\nint b;").unwrap();

        let counts = tally_file(file.path()).unwrap();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.code, 2);
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = tally_file(Path::new("does/not/exist.c")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.c"));
    }
}
