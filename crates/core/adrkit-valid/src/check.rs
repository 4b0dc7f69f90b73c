//! Whole-scan validation.

use adrkit_extract::ScanOutput;
use adrkit_types::{CheckReport, DecisionField, Issue, IssueKind, OrphanBlock, SourceLocation};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::error::ValidationError;
use crate::validate::{validate_record, validate_status, StatusCheck};

/// Validate everything a scan found.
///
/// - Orphan blocks and records without a name are
///   `missing_required_field` errors.
/// - Unknown statuses are `invalid_status` warnings, or errors when
///   `strict` is set.
/// - The first aggregation conflict is reported as an
///   `aggregation_error`.
pub fn check(scan: &ScanOutput, strict: bool) -> CheckReport {
    let mut report = CheckReport::default();
    report.summary.total_annotations = scan.annotation_count();

    for orphan in &scan.orphans {
        report.push(Issue::error(
            &orphan.location,
            IssueKind::MissingRequiredField,
            orphan_message(orphan),
        ));
    }

    let mut aggregatable = Vec::with_capacity(scan.records.len());
    for located in &scan.records {
        match validate_record(&located.record) {
            Ok(()) => {
                report.summary.valid_annotations += 1;
                aggregatable.push(located.clone());
            }
            Err(err) => report.push(Issue::error(
                &located.location,
                IssueKind::MissingRequiredField,
                err.to_string(),
            )),
        }

        match validate_status(&located.record.status, strict) {
            StatusCheck::Valid => {}
            StatusCheck::Warning(err) => report.push(Issue::warning(
                &located.location,
                IssueKind::InvalidStatus,
                err.to_string(),
            )),
            StatusCheck::Error(err) => report.push(Issue::error(
                &located.location,
                IssueKind::InvalidStatus,
                err.to_string(),
            )),
        }
    }

    if let Err(err) = aggregate(&aggregatable) {
        report.push(aggregation_issue(&err));
    }

    report.finalize();
    debug!(
        status = %report.status,
        errors = report.summary.error_count,
        warnings = report.summary.warning_count,
        "check complete"
    );
    report
}

fn orphan_message(orphan: &OrphanBlock) -> String {
    if orphan.fields.first() == Some(&DecisionField::Id) {
        "decision tag block has an empty id".to_string()
    } else {
        let fields: Vec<_> = orphan.fields.iter().map(|f| f.as_str()).collect();
        format!(
            "decision tags without a preceding id: {}",
            fields.join(", ")
        )
    }
}

fn aggregation_issue(err: &ValidationError) -> Issue {
    let location = err
        .location()
        .cloned()
        .unwrap_or_else(|| SourceLocation::new("", 0));
    Issue::error(&location, IssueKind::AggregationError, err.to_string())
}
