//! LLM prompt for claim classification

/// Task statement
const CLASSIFICATION_INSTRUCTIONS: &str = "\
Analyze whether this sentence from a technical or scientific document is a \
factual claim that requires a citation.";

/// Output format demanded from the model
const OUTPUT_FORMAT: &str = r#"Respond with JSON only:
{
  "needs_citation": true or false,
  "confidence": "high" or "medium" or "low",
  "reason": "brief explanation",
  "suggested_action": "add citation" or "no action needed" or "review manually"
}"#;

/// Guidelines mirroring the pattern tiers
const GUIDELINES: &str = "\
Guidelines:
- Performance comparisons (\"X is faster than Y\") NEED citations
- Attribution of discoveries (\"discovered by\", \"introduced by\") NEED citations
- Quantitative claims (numbers, percentages) NEED citations
- Definitions (\"is defined as\") do NOT need citations
- Examples (\"for example\", \"e.g.\") do NOT need citations
- Transitional prose (\"in this section\") does NOT need citations";

/// Builds the classification prompt for one sentence
pub struct ClaimPrompt<'a> {
    sentence: &'a str,
}

impl<'a> ClaimPrompt<'a> {
    /// Create a prompt for `sentence`
    pub fn new(sentence: &'a str) -> Self {
        Self { sentence }
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        format!(
            "{}\n\nSentence: {:?}\n\n{}\n\n{}",
            CLASSIFICATION_INSTRUCTIONS, self.sentence, OUTPUT_FORMAT, GUIDELINES
        )
    }
}
