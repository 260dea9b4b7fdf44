//! Attest CLI - Verify citations, links and claims in technical prose.

use attest_cli::cli::{ConfigAction, ConfigArgs};
use attest_cli::commands;
use attest_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit code when no report could be produced.
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Log to stderr so stdout stays machine-readable; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> attest_cli::Result<i32> {
    let path = Config::resolve_path(cli.config.as_deref())?;
    let config = match &cli.command {
        // must keep working when the current file is broken
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. } | ConfigAction::Path,
        }) => Config::load(&path).unwrap_or_default(),
        _ => Config::load(&path)?,
    };

    let format = cli.output_format(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Verify(args) => {
            let formatter = formatter.summary_only(args.summary);
            commands::execute_verify(args, &config, &formatter)
        }
        Command::Classify(args) => {
            commands::execute_classify(args, &config, &formatter)?;
            Ok(0)
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &path, &formatter)?;
            Ok(0)
        }
    }
}
