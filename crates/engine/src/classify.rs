// crates/engine/src/classify.rs
use std::path::Path;

/// Extensions recognized as C sources. Exact match, case-sensitive.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "h"];

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Blank,
    Code,
}

/// Classify one line, priority comment > blank > code.
///
/// A line is a comment iff, after trimming, it starts with `/*`, `//` or
/// `*` (the latter also covers `**` and `*/` continuation markers). This is
/// a single-line heuristic: lines inside a `/* ... */` block that do not
/// start with a marker themselves classify as code.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.starts_with("/*") || trimmed.starts_with("//") || trimmed.starts_with('*') {
        LineKind::Comment
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Code
    }
}

/// Whether a path is eligible for classification.
///
/// Directories are never eligible; files qualify only on an exact extension
/// match. Extensionless files are skipped unopened.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
