//! Extracted decision records and where they came from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{DecisionField, DecisionStatus};

/// One decision record as written in a single tag block.
///
/// All fields other than `id` default to the empty string. Block fields
/// (`context`, `decision`, `consequences`) hold their inline value and
/// continuation lines joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Record identifier (required)
    pub id: String,
    /// Short title
    pub name: String,
    /// Lifecycle status; open set, kept verbatim
    pub status: String,
    /// Grouping tag
    pub category: String,
    /// Why the decision was needed
    pub context: String,
    /// What was decided
    pub decision: String,
    /// What follows from the decision
    pub consequences: String,
}

impl DecisionRecord {
    /// Create a record with the given id and every other field empty.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Value of a field.
    pub fn field(&self, field: DecisionField) -> &str {
        match field {
            DecisionField::Id => &self.id,
            DecisionField::Name => &self.name,
            DecisionField::Status => &self.status,
            DecisionField::Category => &self.category,
            DecisionField::Context => &self.context,
            DecisionField::Decision => &self.decision,
            DecisionField::Consequences => &self.consequences,
        }
    }

    /// Mutable access to a field's buffer.
    pub fn field_mut(&mut self, field: DecisionField) -> &mut String {
        match field {
            DecisionField::Id => &mut self.id,
            DecisionField::Name => &mut self.name,
            DecisionField::Status => &mut self.status,
            DecisionField::Category => &mut self.category,
            DecisionField::Context => &mut self.context,
            DecisionField::Decision => &mut self.decision,
            DecisionField::Consequences => &mut self.consequences,
        }
    }

    /// Replace a field's value.
    pub fn set_field(&mut self, field: DecisionField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// A record is well-formed when its id is non-empty.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// The status if it is one of the well-known values.
    pub fn known_status(&self) -> Option<DecisionStatus> {
        DecisionStatus::parse(&self.status)
    }

    /// Iterate over the non-empty fields in canonical order.
    pub fn present_fields(&self) -> impl Iterator<Item = (DecisionField, &str)> {
        DecisionField::ALL
            .into_iter()
            .map(move |f| (f, self.field(f)))
            .filter(|(_, v)| !v.is_empty())
    }
}

/// A position in a scanned file.
///
/// `file` is relative to the scan root and uses `/` separators; `line` is
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A record together with the location of its `id` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedRecord {
    #[serde(flatten)]
    pub record: DecisionRecord,
    pub location: SourceLocation,
}

impl LocatedRecord {
    pub fn new(record: DecisionRecord, location: SourceLocation) -> Self {
        Self { record, location }
    }
}

/// Tag lines that could not be attached to any record.
///
/// Produced when fields appear before the first `id` tag, or after an `id`
/// tag whose value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanBlock {
    /// Location of the first tag line in the block
    pub location: SourceLocation,
    /// Fields seen, in order of appearance
    pub fields: Vec<DecisionField>,
}

impl OrphanBlock {
    /// Whether the block carried a `name` tag.
    pub fn has_name(&self) -> bool {
        self.fields.contains(&DecisionField::Name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = DecisionRecord::new("adr-7");
        assert_eq!(record.id, "adr-7");
        assert!(record.name.is_empty());
        assert!(record.status.is_empty());
        assert!(record.is_well_formed());
        assert_eq!(record.known_status(), None);
    }

    #[test]
    fn test_blank_id_not_well_formed() {
        assert!(!DecisionRecord::new("   ").is_well_formed());
        assert!(!DecisionRecord::default().is_well_formed());
    }

    #[test]
    fn test_set_and_get_field() {
        let mut record = DecisionRecord::new("adr-1");
        record.set_field(DecisionField::Context, "first");
        record.field_mut(DecisionField::Context).push_str(" second");
        assert_eq!(record.field(DecisionField::Context), "first second");
        assert_eq!(record.context, "first second");
    }

    #[test]
    fn test_unknown_status_kept_verbatim() {
        let mut record = DecisionRecord::new("adr-1");
        record.set_field(DecisionField::Status, "in-review");
        assert_eq!(record.status, "in-review");
        assert_eq!(record.known_status(), None);
    }

    #[test]
    fn test_present_fields_order() {
        let mut record = DecisionRecord::new("adr-1");
        record.consequences = "c".to_string();
        record.name = "n".to_string();
        let fields: Vec<_> = record.present_fields().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                DecisionField::Id,
                DecisionField::Name,
                DecisionField::Consequences
            ]
        );
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new("src/app.js", 12);
        assert_eq!(loc.to_string(), "src/app.js:12");
    }

    #[test]
    fn test_located_record_json_is_flat() {
        let located = LocatedRecord::new(
            DecisionRecord::new("adr-1"),
            SourceLocation::new("a.js", 3),
        );
        let json = serde_json::to_value(&located).unwrap();
        assert_eq!(json["id"], "adr-1");
        assert_eq!(json["location"]["line"], 3);
    }
}
