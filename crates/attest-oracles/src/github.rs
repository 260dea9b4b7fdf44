//! Source-host metadata through the `gh` command line

use crate::process::{self, ProcessError};
use crate::OracleConfig;
use attest_domain::{FileLookup, FileMetadata, OracleFailure, Permalink, SourceHost};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Host served by this backend
const GITHUB_HOST: &str = "github.com";

/// Subset of the contents API response we rely on
#[derive(Deserialize)]
struct ContentsResponse {
    size: u64,
}

/// Source host backed by `gh api repos/<o>/<r>/contents/<path>?ref=<commit>`
///
/// The contents API reports a byte size but no line count, so lookups
/// return `line_count: None` and the verifier falls back to estimation.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    timeout: Duration,
}

impl GhCli {
    /// Create a source host using `program` with a per-call timeout
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Create a source host from configuration
    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.source_host_command.clone(), config.timeout())
    }
}

/// API path for a permalink's file at its commit
fn contents_endpoint(link: &Permalink) -> String {
    format!(
        "repos/{}/{}/contents/{}?ref={}",
        link.owner, link.repo, link.path, link.commit
    )
}

fn reports_missing(stdout: &str, stderr: &str) -> bool {
    stderr.contains("404") || stderr.contains("Not Found") || stdout.contains("\"Not Found\"")
}

fn parse_contents(body: &str) -> Result<FileLookup, OracleFailure> {
    let response: ContentsResponse = serde_json::from_str(body.trim())
        .map_err(|e| OracleFailure::Failed(format!("unexpected contents response: {}", e)))?;
    Ok(FileLookup::Found(FileMetadata {
        size_bytes: response.size,
        line_count: None,
    }))
}

impl SourceHost for GhCli {
    fn file_metadata(&self, link: &Permalink) -> Result<FileLookup, OracleFailure> {
        if !link.host.eq_ignore_ascii_case(GITHUB_HOST) {
            return Err(OracleFailure::Unavailable(format!(
                "no source-host backend for {}",
                link.host
            )));
        }

        let endpoint = contents_endpoint(link);
        debug!(%endpoint, "querying source host");

        match process::run(&self.program, ["api", endpoint.as_str()], self.timeout) {
            Ok(out) => parse_contents(&out.stdout),
            Err(ProcessError::Failed {
                ref stdout,
                ref stderr,
                ..
            }) if reports_missing(stdout, stderr) => Ok(FileLookup::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
