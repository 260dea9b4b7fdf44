//! Citation marker extraction

use crate::patterns::CITATION;
use attest_domain::Citation;
use std::collections::HashSet;

/// Unique citations in first-seen order
pub fn extract_citations(text: &str) -> impl Iterator<Item = Citation> + '_ {
    let mut seen = HashSet::new();
    CITATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(move |key| seen.insert(key.as_str()).then(|| Citation::new(key.as_str())))
}

/// Whether `text` carries any citation marker
pub fn has_citation(text: &str) -> bool {
    CITATION.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(text: &str) -> Vec<String> {
        extract_citations(text).map(|c| c.key).collect()
    }

    #[test]
    fn test_bracketed_citation() {
        assert_eq!(keys("See [@paper:tavare1986] for details."), ["tavare1986"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(keys("Compare @paper:a and @paper:a again."), ["a"]);
    }

    #[test]
    fn test_first_seen_order() {
        assert_eq!(
            keys("@paper:b-2 then @paper:a_1, @paper:b-2, @paper:c"),
            ["b-2", "a_1", "c"]
        );
    }

    #[test]
    fn test_no_markers() {
        assert!(keys("plain prose, paper: not a marker").is_empty());
        assert!(!has_citation("@paper: spaced"));
        assert!(has_citation("cited @paper:x here"));
    }
}
