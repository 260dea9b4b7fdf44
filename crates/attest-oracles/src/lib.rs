//! Attest Oracle Adapters
//!
//! Concrete backends for the oracle traits of `attest-domain`.
//!
//! # Backends
//!
//! - [`BipCli`]: knowledge-graph lookups through the `bip` command line
//! - [`GhCli`]: source-host file metadata through `gh api`
//! - [`ReqwestProbe`]: HTTP reachability with bounded timeouts and redirects
//!
//! Every call is bounded by a timeout. A missing backend binary surfaces as
//! [`OracleFailure::Unavailable`](attest_domain::OracleFailure), which
//! verifiers downgrade to a warning.
//!
//! # Examples
//!
//! ```no_run
//! use attest_domain::{KnowledgeGraph, Resolution};
//! use attest_oracles::{BipCli, OracleConfig};
//!
//! let graph = BipCli::from_config(&OracleConfig::default());
//! match graph.resolve("tavare1986") {
//!     Ok(Resolution::Found) => println!("resolved"),
//!     Ok(Resolution::NotFound) => println!("unknown paper"),
//!     Err(e) => println!("lookup failed: {e}"),
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod github;
mod http;
mod knowledge;
pub mod process;

pub use config::{HttpConfig, OracleConfig};
pub use error::OracleError;
pub use github::GhCli;
pub use http::ReqwestProbe;
pub use knowledge::BipCli;
pub use process::{CommandOutput, ProcessError};
