//! Report aggregation
//!
//! The [`ReportBuilder`] is the only accumulator in a run. Summary counts
//! are recomputed from the full outcome list on every [`ReportBuilder::build`],
//! so they always equal the partition of the outcomes by status.

use crate::outcome::now_millis;
use crate::{CheckStatus, CheckType, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Unique identifier for a report (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(uuid::Uuid);

impl ReportId {
    /// Generate a new id
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome counts by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of outcomes
    pub total_checks: usize,
    /// Outcomes with status pass
    pub passed: usize,
    /// Outcomes with status fail
    pub failed: usize,
    /// Outcomes with status warn
    pub warnings: usize,
}

impl ReportSummary {
    /// Partition `outcomes` by status
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(
            Self {
                total_checks: outcomes.len(),
                ..Self::default()
            },
            |mut acc, o| {
                match o.status() {
                    CheckStatus::Pass => acc.passed += 1,
                    CheckStatus::Fail => acc.failed += 1,
                    CheckStatus::Warn => acc.warnings += 1,
                }
                acc
            },
        )
    }

    /// Process exit code: 1 iff any check failed
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Final report of one verification run
///
/// Deserialization rejects a report whose summary or exit code does not
/// follow from its results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportRecord")]
pub struct VerificationReport {
    /// Unique id
    pub report_id: ReportId,
    /// Milliseconds since Unix epoch when the report was built
    pub generated_at: u64,
    /// Input files in the order they were added
    pub content_files: Vec<PathBuf>,
    /// Counts by status
    pub summary: ReportSummary,
    /// Every outcome in submission order
    pub results: Vec<Outcome>,
    /// 0 when nothing failed, else 1
    pub exit_code: i32,
}

/// Wire form of [`VerificationReport`], checked before it becomes one
#[derive(Deserialize)]
struct ReportRecord {
    report_id: ReportId,
    generated_at: u64,
    content_files: Vec<PathBuf>,
    summary: ReportSummary,
    results: Vec<Outcome>,
    exit_code: i32,
}

impl TryFrom<ReportRecord> for VerificationReport {
    type Error = String;

    fn try_from(record: ReportRecord) -> Result<Self, Self::Error> {
        let summary = ReportSummary::from_outcomes(&record.results);
        if record.summary != summary {
            return Err(format!(
                "summary {:?} does not match results {:?}",
                record.summary, summary
            ));
        }
        if record.exit_code != summary.exit_code() {
            return Err(format!(
                "exit_code {} does not match {} failed check(s)",
                record.exit_code, summary.failed
            ));
        }
        Ok(Self {
            report_id: record.report_id,
            generated_at: record.generated_at,
            content_files: record.content_files,
            summary,
            results: record.results,
            exit_code: record.exit_code,
        })
    }
}

impl VerificationReport {
    /// Outcomes with the given status, in report order
    pub fn filter_by_status(&self, status: CheckStatus) -> Vec<&Outcome> {
        self.results.iter().filter(|o| o.status() == status).collect()
    }

    /// Outcomes of the given check type, in report order
    pub fn filter_by_type(&self, check_type: CheckType) -> Vec<&Outcome> {
        self.results
            .iter()
            .filter(|o| o.check_type() == check_type)
            .collect()
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Accumulates files and outcomes for one run
///
/// # Examples
///
/// ```
/// use attest_domain::{ReportBuilder, Outcome};
///
/// let mut builder = ReportBuilder::new();
/// builder.add_file("notes.md");
/// builder.add_result(Outcome::unreadable_file("notes.md", "permission denied"));
///
/// let report = builder.build();
/// assert_eq!(report.summary.failed, 1);
/// assert_eq!(report.exit_code, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    files: Vec<PathBuf>,
    results: Vec<Outcome>,
}

impl ReportBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input file
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    /// Append one outcome, preserving order
    pub fn add_result(&mut self, outcome: Outcome) {
        self.results.push(outcome);
    }

    /// Append many outcomes, preserving order
    pub fn add_results(&mut self, outcomes: impl IntoIterator<Item = Outcome>) {
        self.results.extend(outcomes);
    }

    /// Number of outcomes collected so far
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no outcome has been collected
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Build the report; counts are recomputed from the outcome list
    pub fn build(&self) -> VerificationReport {
        let summary = ReportSummary::from_outcomes(&self.results);
        VerificationReport {
            report_id: ReportId::new(),
            generated_at: now_millis(),
            content_files: self.files.clone(),
            summary,
            results: self.results.clone(),
            exit_code: summary.exit_code(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{CheckDetails, SourceLocation, TodoMarkerDetails};
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = CheckStatus> {
        prop_oneof![
            Just(CheckStatus::Pass),
            Just(CheckStatus::Fail),
            Just(CheckStatus::Warn),
        ]
    }

    fn make(status: CheckStatus) -> Outcome {
        Outcome::new(
            SourceLocation::new("p.md", 1, ""),
            status,
            "m",
            CheckDetails::TodoMarker(TodoMarkerDetails {
                marker: "TODO".into(),
            }),
        )
    }

    proptest! {
        /// Property: summary counts partition the outcome list
        #[test]
        fn test_summary_partitions_results(statuses in prop::collection::vec(status_strategy(), 0..64)) {
            let mut b = ReportBuilder::new();
            b.add_results(statuses.iter().copied().map(make));
            let r = b.build();
            prop_assert_eq!(r.summary.total_checks, r.results.len());
            prop_assert_eq!(r.summary.passed + r.summary.failed + r.summary.warnings, r.summary.total_checks);
        }

        /// Property: exit code is 0 exactly when nothing failed
        #[test]
        fn test_exit_code_law(statuses in prop::collection::vec(status_strategy(), 0..64)) {
            let mut b = ReportBuilder::new();
            b.add_results(statuses.iter().copied().map(make));
            let r = b.build();
            prop_assert_eq!(r.exit_code == 0, r.summary.failed == 0);
        }

        /// Property: insertion order does not change the counts
        #[test]
        fn test_order_independent_counts(statuses in prop::collection::vec(status_strategy(), 0..64)) {
            let mut forward = ReportBuilder::new();
            forward.add_results(statuses.iter().copied().map(make));
            let mut backward = ReportBuilder::new();
            backward.add_results(statuses.iter().rev().copied().map(make));
            prop_assert_eq!(forward.build().summary, backward.build().summary);
        }
    }
}
