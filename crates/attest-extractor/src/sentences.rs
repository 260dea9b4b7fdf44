//! Sentence splitting

use attest_domain::ClaimSentence;

/// Sentences shorter than this many characters are noise
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Abbreviations whose dots never end a sentence
const ABBREVIATIONS: &[&str] = &["e.g.", "i.e."];

/// Split `line` on `.`, `?` and `!`, keeping the terminator
///
/// Dots inside [`ABBREVIATIONS`] do not split. A trailing unterminated
/// fragment is kept. Fragments shorter than [`MIN_SENTENCE_CHARS`]
/// characters are dropped.
pub fn split_sentences(line: &str) -> impl Iterator<Item = ClaimSentence> + '_ {
    spans(line)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(ClaimSentence::new)
}

fn spans(line: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, c) in line.char_indices() {
        let ends = match c {
            '?' | '!' => true,
            '.' => !in_abbreviation(line, i),
            _ => false,
        };
        if ends {
            spans.push(&line[start..=i]);
            start = i + 1;
        }
    }
    if start < line.len() {
        spans.push(&line[start..]);
    }
    spans
}

/// Whether the dot at byte `dot` belongs to a standalone abbreviation
fn in_abbreviation(line: &str, dot: usize) -> bool {
    let bytes = line.as_bytes();
    ABBREVIATIONS.iter().any(|abbr| {
        abbr.bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'.')
            .any(|(offset, _)| {
                let Some(begin) = dot.checked_sub(offset) else {
                    return false;
                };
                let word_start = begin == 0 || !bytes[begin - 1].is_ascii_alphanumeric();
                word_start
                    && bytes
                        .get(begin..begin + abbr.len())
                        .is_some_and(|s| s.eq_ignore_ascii_case(abbr.as_bytes()))
            })
    })
}
