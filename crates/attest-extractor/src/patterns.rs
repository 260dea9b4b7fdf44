//! Process-wide pattern tables
//!
//! Compiled once on first use and never mutated, so extraction is safe to
//! run from any number of threads.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@paper:<key>`; group 1 is the key
pub static CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@paper:([A-Za-z0-9_-]+)").expect("Invalid citation regex")
});

/// `http(s)://` followed by anything but whitespace and closing brackets
pub static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[^\s)\]>]+").expect("Invalid URL regex")
});

/// Blob permalink with a line anchor
///
/// Groups: 1 host, 2 owner, 3 repo, 4 commit, 5 path, 6 start, 7 end.
pub static PERMALINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https://([^/\s]+)/([^/\s]+)/([^/\s]+)/blob/([0-9a-f]{1,40})/([^#\s]+)#L(\d+)(?:-L(\d+))?",
    )
    .expect("Invalid permalink regex")
});

/// TODO-family marker, optionally followed by a colon; group 1 is the word
pub static TODO_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(TODO|FIXME|XXX|HACK)\b:?\s*").expect("Invalid TODO marker regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(CITATION.is_match("@paper:x"));
        assert!(URL.is_match("http://x"));
        assert!(PERMALINK.is_match("https://github.com/o/r/blob/ab/p.rs#L1"));
        assert!(TODO_MARKER.is_match("todo: later"));
    }
}
