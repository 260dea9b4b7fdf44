//! Command implementations.

pub mod classify;
pub mod config;
pub mod verify;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::verify::execute_verify;

use crate::config::Config;
use attest_llm::{select_provider, AnyProvider};
use attest_verifier::ClaimClassifier;

/// Classifier with the configured LLM fallback, if enabled and reachable.
pub(crate) fn build_classifier(config: &Config, use_llm: bool) -> ClaimClassifier<AnyProvider> {
    let provider = if use_llm {
        select_provider(&config.llm)
    } else {
        None
    };
    ClaimClassifier::new(provider)
}
