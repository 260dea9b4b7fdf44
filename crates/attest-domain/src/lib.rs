//! Attest Domain Layer
//!
//! This crate contains the data model shared by every layer of the
//! verification pipeline. It performs no I/O and defines the value objects,
//! the report aggregator, and the trait interfaces through which the
//! pipeline talks to external oracles.
//!
//! ## Key Concepts
//!
//! - **Reference**: one syntactic occurrence (citation, URL, permalink,
//!   TODO marker, claim sentence) pulled out of prose
//! - **Outcome**: the pass/fail/warn judgment for one reference
//! - **Report**: every outcome of a run plus summary counts and exit code
//! - **Oracles**: knowledge graph, source host, HTTP probe and text
//!   completion backends, consumed through narrow traits
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Only `uuid` and `serde` as dependencies
//! - Pure data and aggregation logic
//! - Oracle implementations live in `attest-oracles` and `attest-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod check;
pub mod confidence;
pub mod location;
pub mod outcome;
pub mod reference;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use check::{CheckId, CheckStatus, CheckType};
pub use confidence::Confidence;
pub use location::{LineIndex, SourceLocation};
pub use outcome::{
    CheckDetails, CitationDetails, ClaimDetails, CodeLinkDetails, FileDetails, Outcome,
    TodoMarkerDetails, UrlDetails,
};
pub use reference::{Citation, ClaimSentence, Permalink, Reference, TodoMarker, UrlRef};
pub use report::{ReportBuilder, ReportId, ReportSummary, VerificationReport};
pub use traits::{
    FileLookup, FileMetadata, HttpProbe, KnowledgeGraph, LlmProvider, OracleFailure,
    ProbeMethod, Resolution, SourceHost,
};
