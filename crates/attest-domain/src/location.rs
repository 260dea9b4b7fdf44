//! Source locations and the per-file line index

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a reference occurs
///
/// `line` is 1-based; 0 means the reference could not be relocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the input file, as given by the caller
    pub file: PathBuf,
    /// 1-based line number, or 0 when unknown
    pub line: usize,
    /// Text of the line (empty when unknown)
    #[serde(default)]
    pub text: String,
}

impl SourceLocation {
    /// Create a location for a known line
    pub fn new(file: impl Into<PathBuf>, line: usize, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            text: text.into(),
        }
    }

    /// Location scoped to a whole file (line unknown)
    pub fn whole_file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, String::new())
    }

    /// Whether the line number is known
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// Line-indexed view over one file's content
///
/// Built once per file; every locate is a best-effort substring search
/// in file order.
#[derive(Debug, Clone)]
pub struct LineIndex {
    path: PathBuf,
    lines: Vec<String>,
}

impl LineIndex {
    /// Index `content` read from `path`
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_owned).collect(),
        }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the file had no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of 1-based line `n`; empty for 0 or out of range
    pub fn line(&self, n: usize) -> &str {
        n.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Iterate `(line_number, text)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, l.as_str()))
    }

    /// First line containing `needle`, or 0 when absent
    pub fn locate(&self, needle: &str) -> usize {
        self.find_line(|line| line.contains(needle))
    }

    /// First line for which `pred` holds, or 0
    pub fn find_line(&self, mut pred: impl FnMut(&str) -> bool) -> usize {
        self.iter()
            .find(|(_, text)| pred(text))
            .map(|(n, _)| n)
            .unwrap_or(0)
    }

    /// Build the [`SourceLocation`] of line `n`
    pub fn location(&self, n: usize) -> SourceLocation {
        SourceLocation::new(self.path.clone(), n, self.line(n))
    }

    /// Locate `needle` and build its [`SourceLocation`]
    pub fn location_of(&self, needle: &str) -> SourceLocation {
        self.location(self.locate(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LineIndex {
        LineIndex::new("doc.md", "# Title\n\nFirst body line.\nSecond with @paper:x.\n")
    }

    #[test]
    fn test_locate_is_one_based() {
        let idx = index();
        assert_eq!(idx.len(), 4);
        assert_eq!(idx.locate("# Title"), 1);
        assert_eq!(idx.locate("@paper:x"), 4);
    }

    #[test]
    fn test_locate_missing_is_zero() {
        let idx = index();
        assert_eq!(idx.locate("absent"), 0);
        let loc = idx.location_of("absent");
        assert_eq!(loc.line, 0);
        assert_eq!(loc.text, "");
        assert!(!loc.is_known());
    }

    #[test]
    fn test_line_out_of_range() {
        let idx = index();
        assert_eq!(idx.line(0), "");
        assert_eq!(idx.line(99), "");
        assert_eq!(idx.line(3), "First body line.");
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new("a/b.md", 7, "text");
        assert_eq!(loc.to_string(), "a/b.md:7");
    }
}
