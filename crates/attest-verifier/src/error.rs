//! Error types for the verifier

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during verification
///
/// Only file-level problems surface as errors; every reference-level
/// problem is recorded as an outcome instead.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// Input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// LLM response could not be interpreted
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for VerifierError {
    fn from(e: serde_json::Error) -> Self {
        VerifierError::InvalidResponse(e.to_string())
    }
}
