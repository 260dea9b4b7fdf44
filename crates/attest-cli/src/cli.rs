//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Attest - Verify citations, links and claims in technical prose.
#[derive(Debug, Parser)]
#[command(name = "attest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Shorthand for --format human
    #[arg(long, global = true, conflicts_with = "json")]
    pub human: bool,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ATTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Output format after applying shorthands over `default`.
    pub fn output_format(&self, default: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.human {
            OutputFormat::Human
        } else {
            self.format.map(Into::into).unwrap_or(default)
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Colored report with summary table (default)
    Human,
    /// Pretty-printed JSON
    Json,
    /// JSON on a single line
    Jsonl,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify one or more files
    Verify(VerifyArgs),

    /// Classify a single sentence
    Classify(ClassifyArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Files to verify
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Never consult an LLM for low-confidence claims
    #[arg(long)]
    pub no_llm: bool,

    /// Print only the summary table
    #[arg(short, long)]
    pub summary: bool,

    /// Report passing claim checks too
    #[arg(long)]
    pub all_claims: bool,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Sentence to classify
    pub sentence: String,

    /// Never consult an LLM
    #[arg(long)]
    pub no_llm: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Human => OutputFormat::Human,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_command() {
        let cli = Cli::parse_from(["attest", "verify", "a.md", "b.md", "--no-llm"]);
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.files.len(), 2);
                assert!(args.no_llm);
                assert!(!args.summary);
            }
            _ => panic!("Expected Verify command"),
        }
    }

    #[test]
    fn test_verify_requires_files() {
        assert!(Cli::try_parse_from(["attest", "verify"]).is_err());
    }

    #[test]
    fn test_format_shorthands() {
        let cli = Cli::parse_from(["attest", "verify", "a.md", "--json"]);
        assert_eq!(cli.output_format(OutputFormat::Human), OutputFormat::Json);

        let cli = Cli::parse_from(["attest", "--format", "jsonl", "verify", "a.md"]);
        assert_eq!(cli.output_format(OutputFormat::Human), OutputFormat::Jsonl);

        let cli = Cli::parse_from(["attest", "verify", "a.md"]);
        assert_eq!(cli.output_format(OutputFormat::Json), OutputFormat::Json);
    }

    #[test]
    fn test_human_conflicts_with_json() {
        assert!(Cli::try_parse_from(["attest", "verify", "a.md", "--human", "--json"]).is_err());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["attest", "-vv", "classify", "Some sentence here."]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["attest", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }
}
