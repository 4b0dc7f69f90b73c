//! Enum types for adrkit.
//!
//! Field names and statuses are parsed from free text found in comments,
//! so every enum here exposes a lossless `as_str` and a fallible parser
//! rather than relying on serde for the text form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognised `@decision.<field>` name.
///
/// Tags naming any other field are ignored by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionField {
    /// Record identifier; starts a new record
    Id,
    /// Short human-readable title
    Name,
    /// Lifecycle status (open set, see [`DecisionStatus`])
    Status,
    /// Free-text grouping tag
    Category,
    /// Why the decision was needed
    Context,
    /// What was decided
    Decision,
    /// What follows from the decision
    Consequences,
}

impl DecisionField {
    /// All recognised fields, in canonical rendering order.
    pub const ALL: [DecisionField; 7] = [
        DecisionField::Id,
        DecisionField::Name,
        DecisionField::Status,
        DecisionField::Category,
        DecisionField::Context,
        DecisionField::Decision,
        DecisionField::Consequences,
    ];

    /// Parse a field token as written after `@decision.`.
    ///
    /// Matching is exact (case-sensitive); unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "status" => Some(Self::Status),
            "category" => Some(Self::Category),
            "context" => Some(Self::Context),
            "decision" => Some(Self::Decision),
            "consequences" => Some(Self::Consequences),
            _ => None,
        }
    }

    /// The token used in tags for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Status => "status",
            Self::Category => "category",
            Self::Context => "context",
            Self::Decision => "decision",
            Self::Consequences => "consequences",
        }
    }

    /// Whether the field holds a free-text block rather than a short value.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Context | Self::Decision | Self::Consequences)
    }
}

impl fmt::Display for DecisionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known decision statuses.
///
/// The status field itself is an open set: records keep whatever text was
/// written, and only the validator consults this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DecisionStatus {
    /// Under discussion
    #[default]
    Proposed,
    /// Agreed and in effect
    Accepted,
    /// Considered and turned down
    Rejected,
    /// No longer recommended
    Deprecated,
    /// Replaced by a later decision
    Superseded,
}

impl DecisionStatus {
    /// All well-known statuses.
    pub const ALL: [DecisionStatus; 5] = [
        DecisionStatus::Proposed,
        DecisionStatus::Accepted,
        DecisionStatus::Rejected,
        DecisionStatus::Deprecated,
        DecisionStatus::Superseded,
    ];

    /// Parse a status value; `None` for anything outside the known set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Lowercase text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Deprecated => "deprecated",
            Self::Superseded => "superseded",
        }
    }

    /// Comma-separated list of known statuses, for messages.
    pub fn known_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// No errors, no warnings
    #[default]
    Pass,
    /// Warnings only
    Warning,
    /// At least one error
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warning => write!(f, "warning"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Severity of a single check issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Fails the check
    Error,
    /// Reported but does not fail the check
    Warning,
}

/// Category of a check issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueKind {
    /// `id` or `name` missing from a tag block
    MissingRequiredField,
    /// Status outside the well-known set
    InvalidStatus,
    /// Records sharing an id disagree on name or category
    AggregationError,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField => write!(f, "missing_required_field"),
            Self::InvalidStatus => write!(f, "invalid_status"),
            Self::AggregationError => write!(f, "aggregation_error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_roundtrip() {
        for field in DecisionField::ALL {
            assert_eq!(DecisionField::parse(field.as_str()), Some(field));
        }
        assert_eq!(DecisionField::parse("alternatives"), None);
        assert_eq!(DecisionField::parse("ID"), None);
    }

    #[test]
    fn test_block_fields() {
        assert!(DecisionField::Context.is_block());
        assert!(DecisionField::Consequences.is_block());
        assert!(!DecisionField::Name.is_block());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            DecisionStatus::parse("accepted"),
            Some(DecisionStatus::Accepted)
        );
        assert_eq!(DecisionStatus::parse("Accepted"), None);
        assert_eq!(DecisionStatus::parse("wip"), None);
        assert_eq!(DecisionStatus::default(), DecisionStatus::Proposed);
    }

    #[test]
    fn test_status_known_list() {
        assert_eq!(
            DecisionStatus::known_list(),
            "proposed, accepted, rejected, deprecated, superseded"
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&IssueKind::MissingRequiredField).unwrap(),
            "\"missing_required_field\""
        );
        assert_eq!(serde_json::to_string(&CheckStatus::Fail).unwrap(), "\"fail\"");
        assert_eq!(
            IssueKind::InvalidStatus.to_string(),
            "invalid_status"
        );
    }
}
