//! Confidence tiers attached to claim classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic certainty of a claim classification
///
/// - High: an exemption or a must-cite pattern matched
/// - Medium: a should-cite pattern matched
/// - Low: nothing matched; eligible for oracle escalation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Pattern evidence is unambiguous
    High,
    /// Pattern evidence is suggestive
    Medium,
    /// No pattern evidence
    Low,
}

impl Confidence {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// Parse a tier from a string, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Confidence::High),
            "medium" => Some(Confidence::Medium),
            "low" => Some(Confidence::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Confidence::parse("HIGH"), Some(Confidence::High));
        assert_eq!(Confidence::parse(" Medium "), Some(Confidence::Medium));
        assert_eq!(Confidence::parse("low"), Some(Confidence::Low));
        assert_eq!(Confidence::parse("certain"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for c in [Confidence::High, Confidence::Medium, Confidence::Low] {
            assert_eq!(Confidence::parse(c.as_str()), Some(c));
        }
    }
}
