//! Reference occurrences extracted from prose
//!
//! Each occurrence is immutable once extracted and carries the raw matched
//! text plus any decomposed fields its verifier needs.

use serde::{Deserialize, Serialize};

/// `@paper:<key>` attribution marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    /// Captured key
    pub key: String,
}

impl Citation {
    /// Create a citation for `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The marker as it appears in text
    pub fn marker(&self) -> String {
        format!("@paper:{}", self.key)
    }
}

/// Bare http(s) URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlRef {
    /// The URL as matched
    pub url: String,
}

impl UrlRef {
    /// Create a URL reference
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Source-host blob URL pinned to a commit and line range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permalink {
    /// Full matched URL, including the line anchor
    pub url: String,
    /// Host name, e.g. `github.com`
    pub host: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Commit identifier (hex, up to 40 digits)
    pub commit: String,
    /// File path within the repository
    pub path: String,
    /// First anchored line
    pub start_line: u32,
    /// Last anchored line; equals `start_line` for a single-line anchor
    pub end_line: u32,
}

impl Permalink {
    /// Create a permalink, ordering the line range so `start_line <= end_line`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        url: impl Into<String>,
        host: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        commit: impl Into<String>,
        path: impl Into<String>,
        start_line: u32,
        end_line: Option<u32>,
    ) -> Self {
        let end = end_line.unwrap_or(start_line);
        Self {
            url: url.into(),
            host: host.into(),
            owner: owner.into(),
            repo: repo.into(),
            commit: commit.into(),
            path: path.into(),
            start_line: start_line.min(end),
            end_line: start_line.max(end),
        }
    }

    /// First eight characters of the commit, or all of it when shorter
    pub fn short_commit(&self) -> &str {
        self.commit.get(..8).unwrap_or(&self.commit)
    }

    /// `L<start>` or `L<start>-L<end>`
    pub fn range_label(&self) -> String {
        if self.start_line == self.end_line {
            format!("L{}", self.start_line)
        } else {
            format!("L{}-L{}", self.start_line, self.end_line)
        }
    }
}

/// TODO-family marker left in prose
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoMarker {
    /// Upper-cased marker word (`TODO`, `FIXME`, `XXX`, `HACK`)
    pub marker: String,
    /// Raw matched text including any trailing colon
    pub raw: String,
}

/// Candidate claim sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimSentence {
    /// Trimmed sentence text, terminator included
    pub text: String,
}

impl ClaimSentence {
    /// Create a claim sentence
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Any extracted reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reference {
    /// Attribution marker
    Citation(Citation),
    /// Hyperlink
    Url(UrlRef),
    /// Source permalink
    Permalink(Permalink),
    /// Leftover marker
    TodoMarker(TodoMarker),
    /// Prose sentence
    ClaimSentence(ClaimSentence),
}

impl Reference {
    /// Raw text of the occurrence
    pub fn raw(&self) -> String {
        match self {
            Reference::Citation(c) => c.marker(),
            Reference::Url(u) => u.url.clone(),
            Reference::Permalink(p) => p.url.clone(),
            Reference::TodoMarker(t) => t.raw.clone(),
            Reference::ClaimSentence(s) => s.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(start: u32, end: Option<u32>) -> Permalink {
        Permalink::new(
            "https://github.com/o/r/blob/abc/f.rs#L1",
            "github.com",
            "o",
            "r",
            "0123456789abcdef",
            "f.rs",
            start,
            end,
        )
    }

    #[test]
    fn test_single_line_anchor_defaults_end() {
        let p = link(12, None);
        assert_eq!((p.start_line, p.end_line), (12, 12));
        assert_eq!(p.range_label(), "L12");
    }

    #[test]
    fn test_reversed_range_is_ordered() {
        let p = link(30, Some(10));
        assert_eq!((p.start_line, p.end_line), (10, 30));
        assert_eq!(p.range_label(), "L10-L30");
    }

    #[test]
    fn test_short_commit_never_panics() {
        let mut p = link(1, None);
        assert_eq!(p.short_commit(), "01234567");
        p.commit = "abc".into();
        assert_eq!(p.short_commit(), "abc");
    }

    #[test]
    fn test_citation_marker() {
        let c = Citation::new("tavare1986");
        assert_eq!(c.marker(), "@paper:tavare1986");
        assert_eq!(Reference::Citation(c).raw(), "@paper:tavare1986");
    }
}
