//! Aggregated architecture decision records.

use serde::{Deserialize, Serialize};

use crate::record::SourceLocation;

/// A decision assembled from every record sharing one id.
///
/// Block fields are kept as lists of the non-empty values found, in the
/// order the records were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adr {
    pub id: String,
    pub name: String,
    /// Status of the first record, `proposed` when it had none
    pub status: String,
    pub category: String,
    /// Day of aggregation, `YYYY-MM-DD`
    pub date: String,
    pub context: Vec<String>,
    pub decision: Vec<String>,
    pub consequences: Vec<String>,
    pub locations: Vec<SourceLocation>,
}

impl Adr {
    /// Suggested markdown file name for this decision.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.id)
    }
}
