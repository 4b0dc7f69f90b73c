//! Check report types.
//!
//! The JSON shape of [`CheckReport`] is consumed by CI scripts, so field
//! names are part of the public interface.

use serde::{Deserialize, Serialize};

use crate::enums::{CheckStatus, IssueKind, Severity};
use crate::record::SourceLocation;

/// A single problem found while checking annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub file: String,
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn error(location: &SourceLocation, kind: IssueKind, message: impl Into<String>) -> Self {
        Self::at(location, kind, message, Severity::Error)
    }

    pub fn warning(location: &SourceLocation, kind: IssueKind, message: impl Into<String>) -> Self {
        Self::at(location, kind, message, Severity::Warning)
    }

    fn at(
        location: &SourceLocation,
        kind: IssueKind,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            file: location.file.clone(),
            line: location.line,
            kind,
            message: message.into(),
            severity,
        }
    }
}

/// Counters for a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Records plus orphan blocks seen
    pub total_annotations: usize,
    /// Records carrying both id and name
    pub valid_annotations: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Result of checking a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
    pub summary: CheckSummary,
}

impl CheckReport {
    /// Add an issue to the list matching its severity.
    pub fn push(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    /// Recompute counters and overall status from the issue lists.
    pub fn finalize(&mut self) {
        self.summary.error_count = self.errors.len();
        self.summary.warning_count = self.warnings.len();
        self.status = if !self.errors.is_empty() {
            CheckStatus::Fail
        } else if !self.warnings.is_empty() {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
    }

    pub fn is_failure(&self) -> bool {
        self.status == CheckStatus::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_passes() {
        let mut report = CheckReport::default();
        report.finalize();
        assert_eq!(report.status, CheckStatus::Pass);
        assert!(!report.is_failure());
    }

    #[test]
    fn test_status_from_issues() {
        let loc = SourceLocation::new("a.js", 1);
        let mut report = CheckReport::default();
        report.push(Issue::warning(&loc, IssueKind::InvalidStatus, "odd"));
        report.finalize();
        assert_eq!(report.status, CheckStatus::Warning);
        assert_eq!(report.summary.warning_count, 1);

        report.push(Issue::error(&loc, IssueKind::MissingRequiredField, "no name"));
        report.finalize();
        assert_eq!(report.status, CheckStatus::Fail);
        assert_eq!(report.summary.error_count, 1);
    }

    #[test]
    fn test_issue_json_shape() {
        let loc = SourceLocation::new("src/a.js", 4);
        let issue = Issue::error(&loc, IssueKind::AggregationError, "conflict");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["file"], "src/a.js");
        assert_eq!(json["line"], 4);
        assert_eq!(json["type"], "aggregation_error");
        assert_eq!(json["severity"], "error");
    }
}
