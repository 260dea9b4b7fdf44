//! Classify command implementation.

use super::build_classifier;
use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let sentence = args.sentence.trim();
    if sentence.is_empty() {
        return Err(CliError::InvalidInput("Sentence must not be empty".to_string()));
    }

    let use_llm = config.verify.use_llm && !args.no_llm;
    let classifier = build_classifier(config, use_llm);
    let classification = classifier.classify(sentence, use_llm);

    println!("{}", formatter.format_classification(sentence, &classification)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_empty_sentence_rejected() {
        let args = ClassifyArgs {
            sentence: "   ".to_string(),
            no_llm: true,
        };
        let formatter = Formatter::new(OutputFormat::Human, false);
        let result = execute_classify(args, &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
