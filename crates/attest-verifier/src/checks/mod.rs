//! One verifier per reference kind
//!
//! Each verifier turns one reference plus its location into exactly one
//! [`Outcome`](attest_domain::Outcome). Oracle errors become `fail` or `warn`
//! outcomes; nothing here returns an error.

mod citation;
mod claim;
mod code_link;
mod todo;
mod url;

pub use citation::verify_citation;
pub use claim::verify_claim;
pub use code_link::{estimate_line_count, verify_code_link, CHARS_PER_LINE};
pub use todo::verify_todo_marker;
pub use url::verify_url;
