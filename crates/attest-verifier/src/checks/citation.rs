use attest_domain::{
    CheckDetails, CheckStatus, Citation, CitationDetails, KnowledgeGraph, OracleFailure,
    Outcome, Resolution, SourceLocation,
};
use tracing::debug;

/// Resolve a citation key against the knowledge graph
///
/// Absence is a failure. An unreachable graph is a warning; any other
/// lookup error fails with the raw error text.
pub fn verify_citation<K: KnowledgeGraph + ?Sized>(
    graph: &K,
    citation: &Citation,
    target: SourceLocation,
) -> Outcome {
    let key = &citation.key;
    let resolution = graph.resolve(key);
    debug!(key = %key, ?resolution, "citation lookup");

    let (status, message) = match &resolution {
        Ok(Resolution::Found) => (CheckStatus::Pass, format!("paper ID {:?} resolved", key)),
        Ok(Resolution::NotFound) => (
            CheckStatus::Fail,
            format!("paper ID {:?} not found in knowledge graph", key),
        ),
        Err(e @ OracleFailure::Unavailable(_)) => (
            CheckStatus::Warn,
            format!("cannot verify paper ID {:?}: {}", key, e),
        ),
        Err(e) => (
            CheckStatus::Fail,
            format!("failed to verify paper ID {:?}: {}", key, e),
        ),
    };

    Outcome::new(
        target,
        status,
        message,
        CheckDetails::Citation(CitationDetails {
            paper_id: key.clone(),
            resolved: matches!(resolution, Ok(Resolution::Found)),
        }),
    )
}
