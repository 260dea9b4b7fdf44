//! Attest Verifier
//!
//! Verifies the assertions embedded in technical prose before it is
//! accepted into a larger corpus.
//!
//! # Overview
//!
//! The verifier reads each input file once, extracts typed references with
//! `attest-extractor`, checks every reference against exactly one oracle and
//! aggregates the outcomes into a [`VerificationReport`] whose exit code is
//! non-zero iff something failed.
//!
//! # Architecture
//!
//! ```text
//! File → LineIndex → Extractors → Checks → Outcomes → ReportBuilder → Report
//!                                   │
//!                 KnowledgeGraph · HttpProbe · SourceHost · ClaimClassifier
//! ```
//!
//! # Key Features
//!
//! - **Citations** resolved against a knowledge graph
//! - **URLs** probed with HEAD, retried once with GET
//! - **Permalinks** checked against source-host file metadata, with a
//!   size-based line estimate that only ever warns
//! - **TODO markers** always fail
//! - **Claims** classified by pattern tiers with an optional LLM fallback
//!
//! # Example Usage
//!
//! ```no_run
//! use attest_verifier::{ClaimClassifier, Oracles, Verifier, VerifyOptions};
//! # use attest_domain::*;
//! # struct Offline;
//! # impl KnowledgeGraph for Offline {
//! #     fn resolve(&self, _: &str) -> Result<Resolution, OracleFailure> { Err(OracleFailure::Unavailable("offline".into())) }
//! # }
//! # impl SourceHost for Offline {
//! #     fn file_metadata(&self, _: &Permalink) -> Result<FileLookup, OracleFailure> { Err(OracleFailure::Unavailable("offline".into())) }
//! # }
//! # impl HttpProbe for Offline {
//! #     fn probe(&self, _: ProbeMethod, _: &str) -> Result<u16, OracleFailure> { Err(OracleFailure::Unavailable("offline".into())) }
//! # }
//!
//! let oracles = Oracles::new(Offline, Offline, Offline);
//! let verifier = Verifier::new(oracles, ClaimClassifier::heuristic(), VerifyOptions::default());
//!
//! let report = verifier.verify_files(&["chapter1.md", "chapter2.md"]);
//! std::process::exit(report.exit_code);
//! ```

#![warn(missing_docs)]

pub mod checks;
mod classifier;
mod config;
mod error;
mod parser;
mod pipeline;
mod prompt;

pub use attest_domain::VerificationReport;
pub use classifier::{
    Classification, ClassificationSource, ClaimClassifier, NoOracle,
};
pub use config::VerifyOptions;
pub use error::VerifierError;
pub use parser::{parse_judgment, ClaimJudgment};
pub use pipeline::{Oracles, Verifier};
pub use prompt::ClaimPrompt;
