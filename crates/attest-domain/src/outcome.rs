//! Verification outcomes
//!
//! An [`Outcome`] is write-once: every field is fixed at construction and
//! only readable afterwards. The check kind is derived from the details
//! variant, so the two can never disagree.

use crate::{CheckId, CheckStatus, CheckType, Confidence, SourceLocation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in milliseconds since Unix epoch
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Details of a citation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDetails {
    /// Key looked up in the knowledge graph
    pub paper_id: String,
    /// Whether the knowledge graph confirmed the key
    pub resolved: bool,
}

/// Details of a URL check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDetails {
    /// Probed URL
    pub url: String,
    /// Final HTTP status, when a response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Transport error text, when no usable response arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Details of a code permalink check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLinkDetails {
    /// Checked permalink
    pub permalink: String,
    /// Whether the file exists at the commit
    pub file_exists: bool,
    /// Whether the anchored range fits the file; asserted `true` when the
    /// line count is only estimated
    pub line_range_valid: bool,
    /// Line count used for the range comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<u64>,
    /// Whether `line_count` is a size-based estimate rather than ground truth
    #[serde(default)]
    pub line_count_estimated: bool,
}

/// Details of a claim check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDetails {
    /// Sentence that was classified
    pub claim_text: String,
    /// Classification confidence
    pub confidence: Confidence,
    /// What the author should do
    pub suggested_action: String,
}

/// Details of a TODO marker check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoMarkerDetails {
    /// Marker word found
    pub marker: String,
}

/// Details of a whole-file check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    /// Why the file could not be verified
    pub error: String,
}

/// Kind-specific structured details; the variant determines the check type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckDetails {
    /// Citation lookup
    Citation(CitationDetails),
    /// URL probe
    Url(UrlDetails),
    /// Permalink lookup
    CodeLink(CodeLinkDetails),
    /// Claim classification
    Claim(ClaimDetails),
    /// Marker found
    TodoMarker(TodoMarkerDetails),
    /// Unreadable input
    File(FileDetails),
}

impl CheckDetails {
    /// Check type this variant belongs to
    pub fn check_type(&self) -> CheckType {
        match self {
            CheckDetails::Citation(_) => CheckType::Citation,
            CheckDetails::Url(_) => CheckType::Url,
            CheckDetails::CodeLink(_) => CheckType::CodeLink,
            CheckDetails::Claim(_) => CheckType::Claim,
            CheckDetails::TodoMarker(_) => CheckType::TodoMarker,
            CheckDetails::File(_) => CheckType::File,
        }
    }
}

/// Result of verifying one reference
///
/// Deserialization rejects a record whose `check_type` disagrees with its
/// details variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OutcomeRecord")]
pub struct Outcome {
    check_id: CheckId,
    check_type: CheckType,
    target: SourceLocation,
    status: CheckStatus,
    message: String,
    details: CheckDetails,
    checked_at: u64,
}

/// Wire form of [`Outcome`], checked before it becomes one
#[derive(Deserialize)]
struct OutcomeRecord {
    check_id: CheckId,
    check_type: CheckType,
    target: SourceLocation,
    status: CheckStatus,
    message: String,
    details: CheckDetails,
    checked_at: u64,
}

impl TryFrom<OutcomeRecord> for Outcome {
    type Error = String;

    fn try_from(record: OutcomeRecord) -> Result<Self, Self::Error> {
        let expected = record.details.check_type();
        if record.check_type != expected {
            return Err(format!(
                "check_type {} does not match {} details",
                record.check_type, expected
            ));
        }
        Ok(Self {
            check_id: record.check_id,
            check_type: record.check_type,
            target: record.target,
            status: record.status,
            message: record.message,
            details: record.details,
            checked_at: record.checked_at,
        })
    }
}

impl Outcome {
    /// Create an outcome stamped with a fresh id and the current time
    pub fn new(
        target: SourceLocation,
        status: CheckStatus,
        message: impl Into<String>,
        details: CheckDetails,
    ) -> Self {
        Self {
            check_id: CheckId::new(),
            check_type: details.check_type(),
            target,
            status,
            message: message.into(),
            details,
            checked_at: now_millis(),
        }
    }

    /// Single failing outcome for a file that could not be read
    pub fn unreadable_file(file: impl Into<std::path::PathBuf>, error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            SourceLocation::whole_file(file),
            CheckStatus::Fail,
            error.clone(),
            CheckDetails::File(FileDetails { error }),
        )
    }

    /// Unique id
    pub fn check_id(&self) -> CheckId {
        self.check_id
    }

    /// Kind of check
    pub fn check_type(&self) -> CheckType {
        self.check_type
    }

    /// Where the reference occurs
    pub fn target(&self) -> &SourceLocation {
        &self.target
    }

    /// Pass, fail or warn
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Kind-specific details
    pub fn details(&self) -> &CheckDetails {
        &self.details
    }

    /// Milliseconds since Unix epoch when the check completed
    pub fn checked_at(&self) -> u64 {
        self.checked_at
    }

    /// Whether the check failed
    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}
