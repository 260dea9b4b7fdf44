//! Parse LLM output into a claim judgment

use crate::error::VerifierError;
use attest_domain::Confidence;
use serde::Deserialize;

/// Structured judgment returned by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimJudgment {
    /// Whether the sentence needs a citation
    pub needs_citation: bool,
    /// Model's confidence tier
    pub confidence: Confidence,
    /// Short explanation
    pub reason: String,
    /// Suggested author action, when given
    pub suggested_action: Option<String>,
}

#[derive(Deserialize)]
struct RawJudgment {
    needs_citation: bool,
    confidence: String,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    suggested_action: Option<String>,
}

/// Parse a model response into a [`ClaimJudgment`]
pub fn parse_judgment(response: &str) -> Result<ClaimJudgment, VerifierError> {
    let raw: RawJudgment = serde_json::from_str(extract_json(response))?;
    let confidence = Confidence::parse(&raw.confidence).ok_or_else(|| {
        VerifierError::InvalidResponse(format!("unknown confidence {:?}", raw.confidence))
    })?;
    Ok(ClaimJudgment {
        needs_citation: raw.needs_citation,
        confidence,
        reason: raw.reason.trim().to_string(),
        suggested_action: raw
            .suggested_action
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()),
    })
}

/// Extract JSON from a response, handling markdown code fences
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop the language tag line, then cut at the closing fence
        let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
        let body = body.split("```").next().unwrap_or(body);
        return body.trim();
    }

    // Tolerate prose around a single object
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}
