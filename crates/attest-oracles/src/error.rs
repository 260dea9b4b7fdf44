//! Error types for oracle construction

use thiserror::Error;

/// Errors raised while building an oracle backend
///
/// Lookups themselves never return these; they report
/// [`attest_domain::OracleFailure`] instead.
#[derive(Error, Debug)]
pub enum OracleError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
