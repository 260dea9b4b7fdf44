//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use attest_domain::{CheckStatus, Outcome, VerificationReport};
use attest_verifier::Classification;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    summary_only: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
            summary_only: false,
        }
    }

    /// Render only the summary table in human output.
    pub fn summary_only(mut self, summary_only: bool) -> Self {
        self.summary_only = summary_only;
        self
    }

    /// Format a verification report.
    pub fn format_report(&self, report: &VerificationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Jsonl => Ok(serde_json::to_string(report)?),
            OutputFormat::Human => Ok(self.format_report_human(report)),
        }
    }

    fn format_report_human(&self, report: &VerificationReport) -> String {
        let mut out = vec![
            self.colorize("Verification Report", "cyan"),
            format!("Files checked: {}", report.content_files.len()),
            String::new(),
            self.summary_table(report),
        ];

        if !self.summary_only {
            let failures = report.filter_by_status(CheckStatus::Fail);
            if !failures.is_empty() {
                out.push(String::new());
                out.push(self.colorize("Failures", "red"));
                out.extend(failures.into_iter().map(|o| self.error(&outcome_line(o))));
            }

            let warnings = report.filter_by_status(CheckStatus::Warn);
            if !warnings.is_empty() {
                out.push(String::new());
                out.push(self.colorize("Warnings", "yellow"));
                out.extend(warnings.into_iter().map(|o| self.warning(&outcome_line(o))));
            }
        }

        out.push(String::new());
        out.push(if report.has_failures() {
            self.error(&format!("{} check(s) failed", report.summary.failed))
        } else {
            self.success("All checks passed")
        });
        out.join("\n")
    }

    fn summary_table(&self, report: &VerificationReport) -> String {
        let summary = &report.summary;
        let mut builder = Builder::default();
        builder.push_record(["Checks", "Passed", "Failed", "Warnings"]);
        builder.push_record([
            summary.total_checks.to_string(),
            summary.passed.to_string(),
            summary.failed.to_string(),
            summary.warnings.to_string(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a sentence classification.
    pub fn format_classification(
        &self,
        sentence: &str,
        classification: &Classification,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(classification)?),
            OutputFormat::Jsonl => Ok(serde_json::to_string(classification)?),
            OutputFormat::Human => {
                let verdict = if classification.needs_citation {
                    self.warning("Needs citation")
                } else {
                    self.success("No citation needed")
                };
                let mut lines = vec![
                    format!("Sentence:   {}", sentence),
                    verdict,
                    format!("Confidence: {}", classification.confidence.as_str()),
                    format!("Reason:     {}", classification.reason),
                ];
                if let Some(action) = &classification.suggested_action {
                    lines.push(format!("Action:     {}", action));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

/// `file:line [type] message`
fn outcome_line(outcome: &Outcome) -> String {
    format!(
        "{} [{}] {}",
        outcome.target(),
        outcome.check_type().as_str(),
        outcome.message()
    )
}
