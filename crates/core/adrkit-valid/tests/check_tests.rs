//! Check report tests over scanned projects.

use adrkit_extract::{ScanOutput, Scanner};
use adrkit_test_utils::{TempProject, EXAMPLE_JS, INTEGRATION_JS};
use adrkit_types::{CheckStatus, IssueKind, Severity};
use adrkit_valid::{aggregate, check};
use pretty_assertions::assert_eq;

fn scan(project: &TempProject) -> ScanOutput {
    Scanner::default().scan_root(project.root()).unwrap()
}

#[test]
fn clean_project_passes() {
    let project = TempProject::new()
        .with_file("src/a.js", EXAMPLE_JS)
        .with_file("src/b.js", INTEGRATION_JS);

    let report = check(&scan(&project), false);
    assert_eq!(report.status, CheckStatus::Pass);
    assert_eq!(report.summary.total_annotations, 2);
    assert_eq!(report.summary.valid_annotations, 2);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn empty_project_passes() {
    let project = TempProject::new().with_file("main.js", "console.log(1);\n");
    let report = check(&scan(&project), true);
    assert_eq!(report.status, CheckStatus::Pass);
    assert_eq!(report.summary.total_annotations, 0);
}

#[test]
fn unknown_status_warns() {
    let project = TempProject::new().with_file(
        "src/a.js",
        "// @decision.id: adr-1\n// @decision.name: One\n// @decision.status: wip\n",
    );

    let report = check(&scan(&project), false);
    assert_eq!(report.status, CheckStatus::Warning);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, IssueKind::InvalidStatus);
    assert_eq!(report.warnings[0].file, "src/a.js");
    assert_eq!(report.warnings[0].line, 1);
}

#[test]
fn strict_mode_escalates_status() {
    let project = TempProject::new().with_file(
        "src/a.js",
        "// @decision.id: adr-1\n// @decision.name: One\n// @decision.status: wip\n",
    );

    let report = check(&scan(&project), true);
    assert_eq!(report.status, CheckStatus::Fail);
    assert_eq!(report.errors[0].severity, Severity::Error);
    assert!(report.warnings.is_empty());
}

#[test]
fn missing_name_fails() {
    let project = TempProject::new().with_file("src/a.js", "// @decision.id: adr-1\n");

    let report = check(&scan(&project), false);
    assert_eq!(report.status, CheckStatus::Fail);
    assert_eq!(report.summary.valid_annotations, 0);
    assert_eq!(report.errors[0].kind, IssueKind::MissingRequiredField);
    assert_eq!(
        report.errors[0].message,
        "decision 'adr-1' is missing required field 'name'"
    );
}

#[test]
fn orphan_tags_fail() {
    let project = TempProject::new().with_file(
        "src/a.py",
        "# @decision.name: Floating\n# @decision.status: accepted\n",
    );

    let report = check(&scan(&project), false);
    assert_eq!(report.status, CheckStatus::Fail);
    assert_eq!(report.summary.total_annotations, 1);
    assert_eq!(
        report.errors[0].message,
        "decision tags without a preceding id: name, status"
    );
}

#[test]
fn conflicting_names_fail_once() {
    let project = TempProject::new()
        .with_file("a.js", "// @decision.id: adr-1\n// @decision.name: One\n")
        .with_file("b.js", "// @decision.id: adr-1\n// @decision.name: Uno\n")
        .with_file("c.js", "// @decision.id: adr-1\n// @decision.name: Eins\n");

    let output = scan(&project);
    assert!(aggregate(&output.records).is_err());

    let report = check(&output, false);
    assert_eq!(report.errors.len(), 1);
    let issue = &report.errors[0];
    assert_eq!(issue.kind, IssueKind::AggregationError);
    assert_eq!(issue.file, "b.js");
    assert_eq!(issue.line, 1);
}

#[test]
fn report_serializes_with_stable_names() {
    let project = TempProject::new().with_file("src/a.js", "// @decision.id: adr-1\n");
    let report = check(&scan(&project), false);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "fail");
    assert_eq!(json["errors"][0]["type"], "missing_required_field");
    assert_eq!(json["summary"]["total_annotations"], 1);
    assert_eq!(json["summary"]["error_count"], 1);
}
