//! Merging records that share an id.

use std::collections::HashMap;

use adrkit_types::{Adr, DecisionRecord, LocatedRecord, DATE_FORMAT, DEFAULT_STATUS};
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::validate::validate_record;

/// Aggregate records into ADRs dated today.
///
/// See [`aggregate_on`].
pub fn aggregate(records: &[LocatedRecord]) -> ValidationResult<Vec<Adr>> {
    aggregate_on(records, Local::now().date_naive())
}

/// Aggregate records into ADRs, one per distinct id.
///
/// ADRs are returned in order of each id's first appearance. The first
/// record of an id fixes its name, status and category; later records
/// must agree on name and category. Non-empty context, decision and
/// consequences blocks are collected from every record, as is every
/// location.
pub fn aggregate_on(records: &[LocatedRecord], date: NaiveDate) -> ValidationResult<Vec<Adr>> {
    let date = date.format(DATE_FORMAT).to_string();
    let mut adrs: Vec<Adr> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for located in records {
        let record = &located.record;
        validate_record(record)?;

        let slot = match index.get(&record.id) {
            Some(&slot) => {
                check_consistent(&adrs[slot], located)?;
                slot
            }
            None => {
                index.insert(record.id.clone(), adrs.len());
                adrs.push(start_adr(record, &date));
                adrs.len() - 1
            }
        };

        let adr = &mut adrs[slot];
        push_non_empty(&mut adr.context, &record.context);
        push_non_empty(&mut adr.decision, &record.decision);
        push_non_empty(&mut adr.consequences, &record.consequences);
        adr.locations.push(located.location.clone());
    }

    debug!(records = records.len(), adrs = adrs.len(), "aggregated");
    Ok(adrs)
}

fn start_adr(record: &DecisionRecord, date: &str) -> Adr {
    let status = if record.status.is_empty() {
        DEFAULT_STATUS.to_string()
    } else {
        record.status.clone()
    };
    Adr {
        id: record.id.clone(),
        name: record.name.clone(),
        status,
        category: record.category.clone(),
        date: date.to_string(),
        ..Default::default()
    }
}

fn check_consistent(adr: &Adr, located: &LocatedRecord) -> ValidationResult<()> {
    let record = &located.record;
    let first_location = adr
        .locations
        .first()
        .cloned()
        .unwrap_or_else(|| located.location.clone());

    if adr.name != record.name {
        return Err(ValidationError::ConflictingName {
            id: record.id.clone(),
            first: adr.name.clone(),
            first_location,
            second: record.name.clone(),
            second_location: located.location.clone(),
        });
    }
    if adr.category != record.category {
        return Err(ValidationError::ConflictingCategory {
            id: record.id.clone(),
            first: adr.category.clone(),
            first_location,
            second: record.category.clone(),
            second_location: located.location.clone(),
        });
    }
    Ok(())
}

fn push_non_empty(blocks: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        blocks.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adrkit_test_utils::{located, named_record};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_on(&[], day()).unwrap().is_empty());
    }

    #[test]
    fn test_merges_same_id() {
        let mut first = named_record("adr-1", "Use Pino");
        first.context = "fast".to_string();
        let mut second = named_record("adr-1", "Use Pino");
        second.context = "structured".to_string();
        second.status = "accepted".to_string();

        let adrs = aggregate_on(
            &[located(first, "a.js", 1), located(second, "b.js", 7)],
            day(),
        )
        .unwrap();

        assert_eq!(adrs.len(), 1);
        let adr = &adrs[0];
        assert_eq!(adr.status, "proposed");
        assert_eq!(adr.date, "2024-03-09");
        assert_eq!(adr.context, vec!["fast", "structured"]);
        assert!(adr.decision.is_empty());
        assert_eq!(adr.locations.len(), 2);
        assert_eq!(adr.locations[1].to_string(), "b.js:7");
    }

    #[test]
    fn test_first_appearance_order() {
        let adrs = aggregate_on(
            &[
                located(named_record("adr-9", "Nine"), "a.js", 1),
                located(named_record("adr-2", "Two"), "a.js", 5),
                located(named_record("adr-9", "Nine"), "b.js", 1),
            ],
            day(),
        )
        .unwrap();
        let ids: Vec<_> = adrs.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["adr-9", "adr-2"]);
    }

    #[test]
    fn test_conflicting_name() {
        let err = aggregate_on(
            &[
                located(named_record("adr-1", "Use Pino"), "a.js", 1),
                located(named_record("adr-1", "Use Winston"), "b.js", 3),
            ],
            day(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "conflicting names for adr-1: 'Use Pino' at a.js:1 vs 'Use Winston' at b.js:3"
        );
        assert_eq!(err.location().map(|l| l.line), Some(3));
    }

    #[test]
    fn test_conflicting_category() {
        let mut second = named_record("adr-1", "Use Pino");
        second.category = "backend".to_string();
        let err = aggregate_on(
            &[
                located(named_record("adr-1", "Use Pino"), "a.js", 1),
                located(second, "b.js", 3),
            ],
            day(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::ConflictingCategory { .. }));
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = aggregate_on(
            &[located(DecisionRecord::new("adr-1"), "a.js", 1)],
            day(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }
}
