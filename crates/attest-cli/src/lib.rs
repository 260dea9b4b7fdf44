//! Attest CLI library.
//!
//! Argument parsing, configuration loading, backend wiring and report
//! rendering for the `attest` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
