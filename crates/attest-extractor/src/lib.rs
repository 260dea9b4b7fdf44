//! Attest Extractor
//!
//! Pure reference extractors over raw prose.
//!
//! # Overview
//!
//! Every extractor takes a `&str` and returns a lazy iterator of typed
//! reference occurrences borrowing that text. Extraction never fails; text
//! without matches yields an empty sequence, and calling the extractor again
//! restarts it.
//!
//! # Recognized Syntax
//!
//! - `@paper:<key>` attribution markers
//! - bare `http(s)://` URLs
//! - source-host blob permalinks `https://<host>/<owner>/<repo>/blob/<commit>/<path>#L<a>[-L<b>]`
//! - `TODO`, `FIXME`, `XXX`, `HACK` markers
//! - sentences, split on terminal punctuation
//!
//! # Example Usage
//!
//! ```
//! use attest_extractor::{extract_citations, extract_permalinks};
//!
//! let keys: Vec<_> = extract_citations("See @paper:a and @paper:b, then @paper:a.")
//!     .map(|c| c.key)
//!     .collect();
//! assert_eq!(keys, ["a", "b"]);
//!
//! let link = extract_permalinks("https://github.com/o/r/blob/abc123/src/lib.rs#L10")
//!     .next()
//!     .unwrap();
//! assert_eq!((link.start_line, link.end_line), (10, 10));
//! ```

#![warn(missing_docs)]

mod citations;
mod links;
mod markers;
pub mod patterns;
mod sentences;

pub use citations::{extract_citations, has_citation};
pub use links::{extract_permalinks, extract_urls, is_permalink};
pub use markers::extract_todo_markers;
pub use sentences::{split_sentences, MIN_SENTENCE_CHARS};
