//! URL and permalink extraction

use crate::patterns::{PERMALINK, URL};
use attest_domain::{Permalink, UrlRef};

/// Characters that end a sentence rather than a URL
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];

/// URLs in order of appearance, trailing sentence punctuation removed
pub fn extract_urls(text: &str) -> impl Iterator<Item = UrlRef> + '_ {
    URL.find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|url| has_host(url))
        .map(UrlRef::new)
}

/// Whether something follows the scheme before the first `/`, `?` or `#`
fn has_host(url: &str) -> bool {
    url.split_once("://")
        .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
        .is_some_and(|host| !host.is_empty())
}

/// Blob permalinks in order of appearance
///
/// A match whose line numbers overflow `u32` is dropped.
pub fn extract_permalinks(text: &str) -> impl Iterator<Item = Permalink> + '_ {
    PERMALINK.captures_iter(text).filter_map(|caps| {
        let start = caps.get(6)?.as_str().parse::<u32>().ok()?;
        let end = match caps.get(7) {
            Some(m) => Some(m.as_str().parse::<u32>().ok()?),
            None => None,
        };
        Some(Permalink::new(
            caps.get(0)?.as_str(),
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4)?.as_str(),
            caps.get(5)?.as_str(),
            start,
            end,
        ))
    })
}

/// Whether `url` is a blob permalink
pub fn is_permalink(url: &str) -> bool {
    PERMALINK.is_match(url)
}
