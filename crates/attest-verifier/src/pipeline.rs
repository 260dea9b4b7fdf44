//! File orchestration
//!
//! Reads each file once, runs the extractors over it and dispatches every
//! reference to its check, in a fixed order: TODO markers, citations, URLs,
//! permalinks, then claim sentences.

use crate::checks::{
    verify_citation, verify_claim, verify_code_link, verify_todo_marker, verify_url,
};
use crate::{ClaimClassifier, NoOracle, VerifierError, VerifyOptions};
use attest_domain::{
    CheckStatus, HttpProbe, KnowledgeGraph, LineIndex, LlmProvider, Outcome, ReportBuilder,
    SourceHost, VerificationReport,
};
use attest_extractor::{
    extract_citations, extract_permalinks, extract_todo_markers, extract_urls, has_citation,
    is_permalink, split_sentences,
};
use std::path::Path;
use tracing::{debug, info};

const FENCE: &str = "```";

/// The external systems a run checks against
pub struct Oracles {
    knowledge_graph: Box<dyn KnowledgeGraph>,
    source_host: Box<dyn SourceHost>,
    http: Box<dyn HttpProbe>,
}

impl Oracles {
    /// Bundle one backend per oracle seam
    pub fn new(
        knowledge_graph: impl KnowledgeGraph + 'static,
        source_host: impl SourceHost + 'static,
        http: impl HttpProbe + 'static,
    ) -> Self {
        Self {
            knowledge_graph: Box::new(knowledge_graph),
            source_host: Box::new(source_host),
            http: Box::new(http),
        }
    }
}

/// Runs every check over a set of files
pub struct Verifier<L: LlmProvider = NoOracle> {
    oracles: Oracles,
    classifier: ClaimClassifier<L>,
    options: VerifyOptions,
}

impl<L: LlmProvider> Verifier<L> {
    /// Create a verifier
    pub fn new(oracles: Oracles, classifier: ClaimClassifier<L>, options: VerifyOptions) -> Self {
        Self {
            oracles,
            classifier,
            options,
        }
    }

    /// Run every check over already-read content
    pub fn verify_content(&self, path: impl AsRef<Path>, content: &str) -> Vec<Outcome> {
        let index = LineIndex::new(path.as_ref(), content);
        let mut outcomes = Vec::new();

        for (n, line) in index.iter() {
            for marker in extract_todo_markers(line) {
                outcomes.push(verify_todo_marker(&marker, index.location(n)));
            }
        }

        for citation in extract_citations(content) {
            let n = index.find_line(|line| extract_citations(line).any(|c| c.key == citation.key));
            debug!(key = %citation.key, line = n, "checking citation");
            outcomes.push(verify_citation(
                &*self.oracles.knowledge_graph,
                &citation,
                index.location(n),
            ));
        }

        for url in extract_urls(content).filter(|u| !is_permalink(&u.url)) {
            debug!(url = %url.url, "checking url");
            outcomes.push(verify_url(&*self.oracles.http, &url, index.location_of(&url.url)));
        }

        for link in extract_permalinks(content) {
            debug!(url = %link.url, "checking permalink");
            outcomes.push(verify_code_link(
                &*self.oracles.source_host,
                &link,
                index.location_of(&link.url),
            ));
        }

        outcomes.extend(self.verify_claims(&index));
        outcomes
    }

    fn verify_claims(&self, index: &LineIndex) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        let mut in_fence = false;

        for (n, line) in index.iter() {
            if line.trim_start().starts_with(FENCE) {
                in_fence = !in_fence;
                continue;
            }
            if in_fence
                || line.trim().is_empty()
                || line.starts_with("---")
                || line.starts_with('#')
            {
                continue;
            }

            let previous_cited = has_citation(index.line(n - 1));
            for sentence in split_sentences(line) {
                let cited = previous_cited || has_citation(&sentence.text);
                let outcome = verify_claim(
                    &self.classifier,
                    &sentence,
                    cited,
                    self.options.use_llm,
                    index.location(n),
                );
                if self.options.report_passing_claims || outcome.status() == CheckStatus::Fail {
                    outcomes.push(outcome);
                }
            }
        }
        outcomes
    }

    /// Read and verify one file
    pub fn verify_file(&self, path: impl AsRef<Path>) -> Result<Vec<Outcome>, VerifierError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| VerifierError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let outcomes = self.verify_content(path, &content);
        info!(file = %path.display(), checks = outcomes.len(), "verified file");
        Ok(outcomes)
    }

    /// Verify every file and build the report
    ///
    /// A file that cannot be read contributes one failing `file` outcome;
    /// the remaining files are still checked.
    pub fn verify_files<I, P>(&self, paths: I) -> VerificationReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = ReportBuilder::new();
        for path in paths {
            let path = path.as_ref();
            builder.add_file(path);
            match self.verify_file(path) {
                Ok(outcomes) => builder.add_results(outcomes),
                Err(e) => builder.add_result(Outcome::unreadable_file(path, e.to_string())),
            }
        }

        let report = builder.build();
        info!(
            files = report.content_files.len(),
            total = report.summary.total_checks,
            failed = report.summary.failed,
            warnings = report.summary.warnings,
            "verification complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_domain::{
        CheckType, FileLookup, OracleFailure, Permalink, ProbeMethod, Resolution,
    };

    struct Everything;

    impl KnowledgeGraph for Everything {
        fn resolve(&self, _key: &str) -> Result<Resolution, OracleFailure> {
            Ok(Resolution::Found)
        }
    }

    impl SourceHost for Everything {
        fn file_metadata(&self, _link: &Permalink) -> Result<FileLookup, OracleFailure> {
            Ok(FileLookup::NotFound)
        }
    }

    impl HttpProbe for Everything {
        fn probe(&self, _method: ProbeMethod, _url: &str) -> Result<u16, OracleFailure> {
            Ok(200)
        }
    }

    fn verifier(options: VerifyOptions) -> Verifier {
        Verifier::new(
            Oracles::new(Everything, Everything, Everything),
            ClaimClassifier::heuristic(),
            options,
        )
    }

    fn types(outcomes: &[Outcome]) -> Vec<CheckType> {
        outcomes.iter().map(Outcome::check_type).collect()
    }

    #[test]
    fn test_check_order() {
        let content = "See @paper:abc and https://example.com/page today.\n\
                       Code at https://github.com/o/r/blob/abc123/src/x.rs#L3 here.\n\
                       TODO: tidy this paragraph up.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert_eq!(
            types(&outcomes),
            vec![
                CheckType::TodoMarker,
                CheckType::Citation,
                CheckType::Url,
                CheckType::CodeLink,
            ]
        );
        assert_eq!(outcomes[0].target().line, 3);
        assert_eq!(outcomes[1].target().line, 1);
        assert_eq!(outcomes[3].target().line, 2);
    }

    #[test]
    fn test_citation_located_by_exact_key() {
        let content = "First cites @paper:abcd here.\nSecond cites @paper:ab here.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        let lines: Vec<_> = outcomes.iter().map(|o| o.target().line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_duplicate_citations_checked_once() {
        let content = "Uses @paper:x once.\nUses @paper:x again.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn test_claims_skip_structure_and_fences() {
        let content = "---\n\
                       # Heading is 40% faster than the rest\n\
                       ```\n\
                       let x = 2x faster than y;\n\
                       ```\n\
                       \n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_uncited_claim_reported() {
        let content = "Method A is 40% faster than method B.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert_eq!(types(&outcomes), vec![CheckType::Claim]);
        assert_eq!(outcomes[0].status(), CheckStatus::Fail);
    }

    #[test]
    fn test_example_language_exempt_in_prose() {
        let content = "Many tools, e.g. grep, are faster than awk here.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_preceding_line_citation_counts() {
        let content = "Background from @paper:smith2020 applies.\n\
                       Method A is 40% faster than method B.\n";
        let outcomes = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert!(outcomes.iter().all(|o| o.check_type() != CheckType::Claim));
    }

    #[test]
    fn test_passing_claims_only_when_requested() {
        let content = "The configuration file lives in the home directory.\n";
        let quiet = verifier(VerifyOptions::offline()).verify_content("a.md", content);
        assert!(quiet.is_empty());

        let options = VerifyOptions {
            use_llm: false,
            report_passing_claims: true,
        };
        let loud = verifier(options).verify_content("a.md", content);
        assert_eq!(loud.len(), 1);
        assert_eq!(loud[0].status(), CheckStatus::Pass);
    }
}
