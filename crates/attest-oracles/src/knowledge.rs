//! Knowledge-graph lookups through the `bip` command line

use crate::process::{self, ProcessError};
use crate::OracleConfig;
use attest_domain::{KnowledgeGraph, OracleFailure, Resolution};
use std::time::Duration;
use tracing::debug;

/// Knowledge graph backed by `bip s2 get <key>`
///
/// Exit status 0 means the paper resolved. A failing exit whose stderr says
/// "not found" or "no such" is an explicit absence; anything else is an
/// error carrying the raw stderr.
#[derive(Debug, Clone)]
pub struct BipCli {
    program: String,
    timeout: Duration,
}

impl BipCli {
    /// Create a lookup using `program` with a per-call timeout
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Create a lookup from configuration
    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.knowledge_graph_command.clone(), config.timeout())
    }
}

fn reports_absence(stderr: &str) -> bool {
    let stderr = stderr.to_lowercase();
    stderr.contains("not found") || stderr.contains("no such")
}

impl KnowledgeGraph for BipCli {
    fn resolve(&self, key: &str) -> Result<Resolution, OracleFailure> {
        match process::run(&self.program, ["s2", "get", key], self.timeout) {
            Ok(_) => Ok(Resolution::Found),
            Err(ProcessError::Failed { ref stderr, .. }) if reports_absence(stderr) => {
                debug!(key, "knowledge graph reports key absent");
                Ok(Resolution::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absence_detection() {
        assert!(reports_absence("Error: paper Not Found"));
        assert!(reports_absence("no such paper: x"));
        assert!(!reports_absence("rate limited, retry later"));
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let graph = BipCli::new("attest-missing-bip", Duration::from_secs(1));
        let err = graph.resolve("x").unwrap_err();
        assert!(err.is_unavailable());
    }
}
