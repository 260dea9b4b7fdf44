//! Claim classification
//!
//! Three ordered pattern tiers decide whether a sentence needs attribution:
//! exemptions first, then must-cite (high confidence), then should-cite
//! (medium confidence). Only when nothing matches, and the caller allows it,
//! is a text-completion oracle consulted.

use crate::parser::parse_judgment;
use crate::prompt::ClaimPrompt;
use attest_domain::{Confidence, LlmProvider};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A pattern group and the reason reported when it matches
struct PatternGroup {
    pattern: Regex,
    reason: &'static str,
}

fn group(pattern: &str, reason: &'static str) -> PatternGroup {
    PatternGroup {
        pattern: Regex::new(pattern).expect("Invalid claim pattern"),
        reason,
    }
}

/// Sentences that never need attribution
static EXEMPT: Lazy<Vec<PatternGroup>> = Lazy::new(|| {
    vec![
        group(
            r"(?i)\b(is\s+defined\s+as|refers?\s+to|means?)\b",
            "Definitional language does not require a citation",
        ),
        group(
            r"(?i)(\b(for\s+example|such\s+as)\b|\be\.g\.|\bi\.e\.)",
            "Example language does not require a citation",
        ),
        group(
            r"(?i)\b(in\s+this\s+(section|chapter)|we\s+now|let\s+us)\b",
            "Transitional prose does not require a citation",
        ),
        group(r"^```", "Code fence marker is not prose"),
    ]
});

/// Claims that always need attribution
static MUST_CITE: Lazy<Vec<PatternGroup>> = Lazy::new(|| {
    vec![
        group(
            r"(?i)\b(\d+%|\d+x|faster|slower|better|worse)\s+(than|compared\s+to)\b",
            "Quantitative or comparative claim requires a citation",
        ),
        group(
            r"(?i)\b(discovered|introduced|invented|developed)\s+by\b",
            "Attribution of a discovery requires a citation",
        ),
        group(
            r"(?i)\b(as\s+shown|as\s+described|according\s+to|as\s+demonstrated)\s+(in|by)\b",
            "Reference to prior work requires a citation",
        ),
        group(
            r"(?i)\bstudies\s+(have\s+)?(shown|demonstrated|found|revealed)\b",
            "Appeal to published studies requires a citation",
        ),
    ]
});

/// Claims that usually need attribution
static SHOULD_CITE: Lazy<Vec<PatternGroup>> = Lazy::new(|| {
    vec![
        group(
            r"(?i)\b(causes?|leads?\s+to|results?\s+in)\b",
            "Causal claim should be cited",
        ),
        group(
            r"(?i)(\bO\((n|log)|\bcomplexity\s+of\b)",
            "Complexity claim should be cited",
        ),
        group(
            r"(?i)\b(historically|traditionally|originally)\b",
            "Historical claim should be cited",
        ),
    ]
});

/// Reason for a sentence that matched no tier
const NO_PATTERN_REASON: &str = "No citation-requiring patterns detected";

fn first_match(groups: &[PatternGroup], sentence: &str) -> Option<&'static str> {
    groups
        .iter()
        .find(|g| g.pattern.is_match(sentence))
        .map(|g| g.reason)
}

/// Which stage produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    /// Pattern tiers
    Heuristic,
    /// Text-completion oracle
    Oracle,
}

/// Decision for one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the sentence needs attribution
    pub needs_citation: bool,
    /// Confidence tier of the decision
    pub confidence: Confidence,
    /// Why
    pub reason: String,
    /// Oracle-suggested action, if any
    pub suggested_action: Option<String>,
    /// Stage that decided
    pub source: ClassificationSource,
}

impl Classification {
    fn heuristic(needs_citation: bool, confidence: Confidence, reason: &str) -> Self {
        Self {
            needs_citation,
            confidence,
            reason: reason.to_string(),
            suggested_action: None,
            source: ClassificationSource::Heuristic,
        }
    }
}

/// Placeholder provider for classifiers without an oracle
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOracle;

impl LlmProvider for NoOracle {
    type Error = &'static str;

    fn name(&self) -> &str {
        "none"
    }

    fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
        Err("no text-completion oracle configured")
    }
}

/// Classifies sentences for missing attribution
///
/// # Examples
///
/// ```
/// use attest_verifier::ClaimClassifier;
/// use attest_domain::Confidence;
///
/// let classifier = ClaimClassifier::heuristic();
/// let c = classifier.classify("Method A is 40% faster than method B.", false);
/// assert!(c.needs_citation);
/// assert_eq!(c.confidence, Confidence::High);
/// ```
pub struct ClaimClassifier<L = NoOracle> {
    oracle: Option<L>,
}

impl ClaimClassifier<NoOracle> {
    /// Pattern tiers only
    pub fn heuristic() -> Self {
        Self { oracle: None }
    }
}

impl<L: LlmProvider> ClaimClassifier<L> {
    /// Pattern tiers with `oracle` as the low-confidence fallback
    pub fn with_oracle(oracle: L) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Use `oracle` when present, else pattern tiers only
    pub fn new(oracle: Option<L>) -> Self {
        Self { oracle }
    }

    /// Classify `sentence`
    ///
    /// The oracle is consulted only when the heuristic result is low
    /// confidence and `allow_oracle` is set. Oracle failures are logged and
    /// the heuristic result stands.
    pub fn classify(&self, sentence: &str, allow_oracle: bool) -> Classification {
        let tentative = classify_heuristic(sentence);
        if tentative.confidence != Confidence::Low || !allow_oracle {
            return tentative;
        }
        let Some(oracle) = &self.oracle else {
            return tentative;
        };

        let prompt = ClaimPrompt::new(sentence).build();
        let judgment = oracle
            .generate(&prompt)
            .map_err(|e| e.to_string())
            .and_then(|response| parse_judgment(&response).map_err(|e| e.to_string()));

        match judgment {
            Ok(j) => {
                debug!(provider = oracle.name(), needs_citation = j.needs_citation, "oracle classified claim");
                Classification {
                    needs_citation: j.needs_citation,
                    confidence: j.confidence,
                    reason: j.reason,
                    suggested_action: j.suggested_action,
                    source: ClassificationSource::Oracle,
                }
            }
            Err(error) => {
                warn!(provider = oracle.name(), %error, "claim oracle failed, keeping heuristic result");
                tentative
            }
        }
    }
}

/// Pattern tiers alone
pub(crate) fn classify_heuristic(sentence: &str) -> Classification {
    if let Some(reason) = first_match(&EXEMPT, sentence) {
        return Classification::heuristic(false, Confidence::High, reason);
    }
    if let Some(reason) = first_match(&MUST_CITE, sentence) {
        return Classification::heuristic(true, Confidence::High, reason);
    }
    if let Some(reason) = first_match(&SHOULD_CITE, sentence) {
        return Classification::heuristic(true, Confidence::Medium, reason);
    }
    Classification::heuristic(false, Confidence::Low, NO_PATTERN_REASON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_llm::MockProvider;

    fn classify(sentence: &str) -> Classification {
        ClaimClassifier::heuristic().classify(sentence, true)
    }

    #[test]
    fn test_definition_is_exempt() {
        let c = classify("A phylogenetic tree is defined as a branching diagram.");
        assert!(!c.needs_citation);
        assert_eq!(c.confidence, Confidence::High);
        assert!(c.reason.contains("Definitional"));
    }

    #[test]
    fn test_example_and_transition_exempt() {
        assert!(!classify("Sorting algorithms such as quicksort are common.").needs_citation);
        assert!(!classify("Many tools, e.g. grep, are faster than awk here.").needs_citation);
        assert!(!classify("In this section we describe the pipeline.").needs_citation);
        assert!(!classify("```rust fn main() {}").needs_citation);
    }

    #[test]
    fn test_exemption_beats_must_cite() {
        let c = classify("Speedup refers to being 2x faster than baseline.");
        assert!(!c.needs_citation);
    }

    #[test]
    fn test_comparative_claim_must_cite() {
        let c = classify("Method A is 40% faster than method B.");
        assert!(c.needs_citation);
        assert_eq!(c.confidence, Confidence::High);
    }

    #[test]
    fn test_attribution_and_prior_work_must_cite() {
        for s in [
            "The algorithm was introduced by Felsenstein.",
            "As shown in prior work, the bound is tight.",
            "Studies have shown that caching helps.",
            "The model performs better compared to the baseline.",
        ] {
            let c = classify(s);
            assert!(c.needs_citation, "{s}");
            assert_eq!(c.confidence, Confidence::High, "{s}");
        }
    }

    #[test]
    fn test_should_cite_is_medium() {
        for s in [
            "Heavy recursion leads to stack exhaustion.",
            "The lookup runs in O(log n) time per query.",
            "Historically, compilers were written in assembly.",
        ] {
            let c = classify(s);
            assert!(c.needs_citation, "{s}");
            assert_eq!(c.confidence, Confidence::Medium, "{s}");
        }
    }

    #[test]
    fn test_plain_prose_is_low() {
        let c = classify("The configuration file lives in the home directory.");
        assert!(!c.needs_citation);
        assert_eq!(c.confidence, Confidence::Low);
        assert_eq!(c.source, ClassificationSource::Heuristic);
    }

    #[test]
    fn test_oracle_overrides_low_confidence() {
        let oracle = MockProvider::new(
            r#"{"needs_citation": true, "confidence": "medium", "reason": "cites a number", "suggested_action": "review manually"}"#,
        );
        let classifier = ClaimClassifier::with_oracle(oracle.clone());
        let c = classifier.classify("The cluster holds twelve thousand nodes.", true);
        assert!(c.needs_citation);
        assert_eq!(c.confidence, Confidence::Medium);
        assert_eq!(c.source, ClassificationSource::Oracle);
        assert_eq!(c.suggested_action.as_deref(), Some("review manually"));
        assert_eq!(oracle.call_count(), 1);
        assert!(oracle.prompts()[0].contains("twelve thousand nodes"));
    }

    #[test]
    fn test_oracle_not_consulted_when_confident() {
        let oracle = MockProvider::new("{}");
        let classifier = ClaimClassifier::with_oracle(oracle.clone());
        classifier.classify("Method A is 40% faster than method B.", true);
        assert_eq!(oracle.call_count(), 0);
    }

    #[test]
    fn test_oracle_not_consulted_when_disallowed() {
        let oracle = MockProvider::new("{}");
        let classifier = ClaimClassifier::with_oracle(oracle.clone());
        let c = classifier.classify("The configuration file lives in the home directory.", false);
        assert_eq!(c.confidence, Confidence::Low);
        assert_eq!(oracle.call_count(), 0);
    }

    #[test]
    fn test_oracle_failure_is_swallowed() {
        let classifier = ClaimClassifier::with_oracle(MockProvider::failing());
        let c = classifier.classify("The configuration file lives in the home directory.", true);
        assert!(!c.needs_citation);
        assert_eq!(c.confidence, Confidence::Low);
        assert_eq!(c.source, ClassificationSource::Heuristic);
    }

    #[test]
    fn test_malformed_oracle_reply_is_swallowed() {
        let classifier = ClaimClassifier::with_oracle(MockProvider::new("definitely not json"));
        let c = classifier.classify("The configuration file lives in the home directory.", true);
        assert_eq!(c.reason, NO_PATTERN_REASON);
    }
}
