//! Check identity, kind and status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a check outcome based on UUIDv7
///
/// UUIDv7 sorts by creation time, so outcomes of a run order
/// chronologically when sorted by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckId(uuid::Uuid);

impl CheckId {
    /// Generate a new UUIDv7-based CheckId
    ///
    /// # Examples
    ///
    /// ```
    /// use attest_domain::CheckId;
    ///
    /// let first = CheckId::new();
    /// let second = CheckId::new();
    /// assert_ne!(first, second);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for CheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of verification a check performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckType {
    /// `@paper:<key>` attribution resolved against the knowledge graph
    Citation,
    /// Bare http(s) URL probed for reachability
    Url,
    /// Source-host permalink checked against the host's file metadata
    CodeLink,
    /// Prose sentence classified for missing attribution
    Claim,
    /// Leftover TODO-family marker
    TodoMarker,
    /// Whole-file check, used when the input cannot be read
    File,
}

impl CheckType {
    /// Wire name of the check type
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckType::Citation => "citation",
            CheckType::Url => "url",
            CheckType::CodeLink => "code-link",
            CheckType::Claim => "claim",
            CheckType::TodoMarker => "todo-marker",
            CheckType::File => "file",
        }
    }

    /// Parse a check type from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "citation" => Some(CheckType::Citation),
            "url" => Some(CheckType::Url),
            "code-link" => Some(CheckType::CodeLink),
            "claim" => Some(CheckType::Claim),
            "todo-marker" => Some(CheckType::TodoMarker),
            "file" => Some(CheckType::File),
            _ => None,
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state result of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Reference verified
    Pass,
    /// Reference is broken or missing attribution
    Fail,
    /// Could not be verified; never affects the exit code
    Warn,
}

impl CheckStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warn => "warn",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
