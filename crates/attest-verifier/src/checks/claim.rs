use crate::ClaimClassifier;
use attest_domain::{
    CheckDetails, CheckStatus, ClaimDetails, ClaimSentence, Confidence, LlmProvider, Outcome,
    SourceLocation,
};

const ADD_CITATION: &str = "add citation";
const NO_ACTION: &str = "no action needed";

/// Check a prose sentence for missing attribution
///
/// A sentence that already carries a citation passes without
/// classification.
pub fn verify_claim<L: LlmProvider>(
    classifier: &ClaimClassifier<L>,
    sentence: &ClaimSentence,
    has_citation: bool,
    allow_oracle: bool,
    target: SourceLocation,
) -> Outcome {
    let details = |confidence, action: &str| {
        CheckDetails::Claim(ClaimDetails {
            claim_text: sentence.text.clone(),
            confidence,
            suggested_action: action.to_string(),
        })
    };

    if has_citation {
        return Outcome::new(
            target,
            CheckStatus::Pass,
            "claim has citation",
            details(Confidence::High, NO_ACTION),
        );
    }

    let c = classifier.classify(&sentence.text, allow_oracle);
    if c.needs_citation {
        let action = c.suggested_action.as_deref().unwrap_or(ADD_CITATION);
        Outcome::new(
            target,
            CheckStatus::Fail,
            format!("uncited factual claim: {}", c.reason),
            details(c.confidence, action),
        )
    } else {
        let action = c.suggested_action.as_deref().unwrap_or(NO_ACTION);
        Outcome::new(target, CheckStatus::Pass, c.reason.clone(), details(c.confidence, action))
    }
}
