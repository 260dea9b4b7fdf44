//! Verify command implementation.

use super::build_classifier;
use crate::cli::VerifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use attest_oracles::{BipCli, GhCli, ReqwestProbe};
use attest_verifier::{Oracles, Verifier, VerifyOptions};

/// Execute the verify command and return the report's exit code.
pub fn execute_verify(args: VerifyArgs, config: &Config, formatter: &Formatter) -> Result<i32> {
    let options = effective_options(&args, config);

    let oracles = Oracles::new(
        BipCli::from_config(&config.oracles),
        GhCli::from_config(&config.oracles),
        ReqwestProbe::new(&config.http)?,
    );
    let classifier = build_classifier(config, options.use_llm);
    let verifier = Verifier::new(oracles, classifier, options);

    let report = verifier.verify_files(&args.files);
    println!("{}", formatter.format_report(&report)?);

    Ok(report.exit_code)
}

/// File options with command-line overrides applied.
fn effective_options(args: &VerifyArgs, config: &Config) -> VerifyOptions {
    let mut options = config.verify.clone();
    if args.no_llm {
        options.use_llm = false;
    }
    if args.all_claims {
        options.report_passing_claims = true;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(no_llm: bool, all_claims: bool) -> VerifyArgs {
        VerifyArgs {
            files: vec!["a.md".into()],
            no_llm,
            summary: false,
            all_claims,
        }
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config::default();
        let options = effective_options(&args(true, true), &config);
        assert!(!options.use_llm);
        assert!(options.report_passing_claims);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let mut config = Config::default();
        config.verify.use_llm = false;
        let options = effective_options(&args(false, false), &config);
        assert!(!options.use_llm);
        assert!(!options.report_passing_claims);
    }
}
