//! Extraction tests against the shared fixtures.

use adrkit_extract::{extract, Extractor};
use adrkit_test_utils::{example_js_record, EXAMPLE_JS, INTEGRATION_JS};
use pretty_assertions::assert_eq;

#[test]
fn example_fixture_yields_one_record() {
    let records = extract(EXAMPLE_JS);
    assert_eq!(records, vec![example_js_record()]);
}

#[test]
fn integration_fixture_yields_independent_record() {
    let records = extract(INTEGRATION_JS);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.id, "adr-1");
    assert_eq!(record.name, "Using Pino for logging");
    assert_eq!(
        record.context,
        "We needed structured logging with low overhead for our high-throughput API. \
         After benchmarking Winston, Bunyan, and Pino, we found that Pino provided the \
         best performance characteristics with the lowest memory overhead."
    );
    assert_eq!(
        record.consequences,
        "All services must migrate from Winston. We gain 3-5x better logging performance \
         but lose some Winston-specific plugins. Team needs training on Pino's API."
    );
}

#[test]
fn concatenated_fixtures_are_not_merged() {
    let source = format!("{EXAMPLE_JS}\n{INTEGRATION_JS}");
    let records = extract(&source);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], example_js_record());
    assert_eq!(records[1], extract(INTEGRATION_JS)[0]);
    assert!(records.iter().all(|r| r.id == "adr-1"));
}

#[test]
fn records_follow_id_order() {
    let source = "\
// @decision.id: adr-3
// @decision.name: Third
// @decision.id: adr-1
// @decision.name: First
// @decision.id: adr-2
// @decision.name: Second
";
    let ids: Vec<_> = extract(source).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["adr-3", "adr-1", "adr-2"]);
}

#[test]
fn fixture_line_numbers_point_at_id_tag() {
    let source = format!("{EXAMPLE_JS}\n{INTEGRATION_JS}");
    let extraction = Extractor::default().scan(&source);
    let first_id_lines: Vec<_> = extraction
        .records
        .iter()
        .map(|r| r.location.line)
        .collect();
    let offset = EXAMPLE_JS.lines().count() + 1;
    assert_eq!(first_id_lines, vec![1, offset + 1]);
    assert!(extraction.orphans.is_empty());
}
