//! Verification options

use serde::{Deserialize, Serialize};

/// Options for a verification run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOptions {
    /// Allow the LLM fallback for low-confidence claims
    pub use_llm: bool,

    /// Report passing claim checks too; by default only failures are kept
    pub report_passing_claims: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            use_llm: true,
            report_passing_claims: false,
        }
    }
}

impl VerifyOptions {
    /// Heuristics only; never consult a model
    pub fn offline() -> Self {
        Self {
            use_llm: false,
            ..Self::default()
        }
    }
}
