//! Trait definitions for external oracles
//!
//! These traits define the boundaries between verification logic and the
//! backends it consults. Implementations live in `attest-oracles` and
//! `attest-llm`; verifiers only ever see these interfaces.

use crate::Permalink;
use std::fmt;

/// Failure talking to an oracle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleFailure {
    /// The backend is not installed or cannot serve this request at all
    Unavailable(String),
    /// The request itself is malformed (e.g. an unparseable URL)
    InvalidRequest(String),
    /// The redirect cap was exceeded
    TooManyRedirects,
    /// The call did not complete within its bound
    Timeout,
    /// Any other backend error, with its raw text
    Failed(String),
}

impl OracleFailure {
    /// Whether the failure means the capability is missing
    pub fn is_unavailable(&self) -> bool {
        matches!(self, OracleFailure::Unavailable(_))
    }
}

impl fmt::Display for OracleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleFailure::Unavailable(reason) => write!(f, "oracle unavailable: {}", reason),
            OracleFailure::InvalidRequest(reason) => write!(f, "invalid request: {}", reason),
            OracleFailure::TooManyRedirects => f.write_str("too many redirects"),
            OracleFailure::Timeout => f.write_str("timed out"),
            OracleFailure::Failed(raw) => f.write_str(raw),
        }
    }
}

impl std::error::Error for OracleFailure {}

/// Answer of a knowledge-graph lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key exists
    Found,
    /// The graph explicitly reports the key as absent
    NotFound,
}

/// Knowledge-graph lookup used by the citation verifier
pub trait KnowledgeGraph {
    /// Resolve a citation key
    fn resolve(&self, key: &str) -> Result<Resolution, OracleFailure>;
}

/// File metadata reported by a source host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// File size in bytes
    pub size_bytes: u64,
    /// Exact line count, when the host knows it
    pub line_count: Option<u64>,
}

/// Answer of a source-host lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLookup {
    /// The file exists at the commit
    Found(FileMetadata),
    /// The file does not exist at the commit
    NotFound,
}

/// Source-hosting file-metadata API used by the permalink verifier
pub trait SourceHost {
    /// Look up the permalink's file at its commit
    fn file_metadata(&self, link: &Permalink) -> Result<FileLookup, OracleFailure>;
}

/// HTTP method used by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// HEAD request
    Head,
    /// GET request
    Get,
}

impl ProbeMethod {
    /// Method name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::Head => "HEAD",
            ProbeMethod::Get => "GET",
        }
    }
}

/// HTTP reachability probe used by the URL verifier
///
/// Implementations follow redirects up to a fixed cap and return the final
/// status code.
pub trait HttpProbe {
    /// Issue one request and return the final status
    fn probe(&self, method: ProbeMethod, url: &str) -> Result<u16, OracleFailure>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (attest-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: fmt::Display;

    /// Short backend name for diagnostics
    fn name(&self) -> &str;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

impl<T: KnowledgeGraph + ?Sized> KnowledgeGraph for &T {
    fn resolve(&self, key: &str) -> Result<Resolution, OracleFailure> {
        (**self).resolve(key)
    }
}

impl<T: SourceHost + ?Sized> SourceHost for &T {
    fn file_metadata(&self, link: &Permalink) -> Result<FileLookup, OracleFailure> {
        (**self).file_metadata(link)
    }
}

impl<T: HttpProbe + ?Sized> HttpProbe for &T {
    fn probe(&self, method: ProbeMethod, url: &str) -> Result<u16, OracleFailure> {
        (**self).probe(method, url)
    }
}

impl<T: LlmProvider + ?Sized> LlmProvider for &T {
    type Error = T::Error;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(OracleFailure::TooManyRedirects.to_string(), "too many redirects");
        assert_eq!(
            OracleFailure::Failed("exit status 3: boom".into()).to_string(),
            "exit status 3: boom"
        );
        assert!(OracleFailure::Unavailable("gh not installed".into()).is_unavailable());
        assert!(!OracleFailure::Timeout.is_unavailable());
    }
}
