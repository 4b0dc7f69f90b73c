//! Per-record validation rules.

use adrkit_types::{DecisionField, DecisionRecord, DecisionStatus};

use crate::error::{ValidationError, ValidationResult};

/// Validate the required fields of a record.
///
/// # Rules
///
/// 1. `id` must be non-empty
/// 2. `name` must be non-empty
pub fn validate_record(record: &DecisionRecord) -> ValidationResult<()> {
    for field in [DecisionField::Id, DecisionField::Name] {
        if record.field(field).trim().is_empty() {
            return Err(ValidationError::MissingField {
                id: record.id.clone(),
                field,
            });
        }
    }
    Ok(())
}

/// Outcome of [`validate_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCheck {
    /// Empty or well-known
    Valid,
    /// Unknown status, tolerated
    Warning(ValidationError),
    /// Unknown status in strict mode
    Error(ValidationError),
}

impl StatusCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Check a status value against the well-known set.
///
/// An empty status is valid; it becomes `proposed` on aggregation.
/// Unknown values are a warning, or an error when `strict` is set.
pub fn validate_status(status: &str, strict: bool) -> StatusCheck {
    if status.is_empty() || DecisionStatus::parse(status).is_some() {
        return StatusCheck::Valid;
    }

    let err = ValidationError::InvalidStatus {
        status: status.to_string(),
        allowed: DecisionStatus::known_list(),
    };
    if strict {
        StatusCheck::Error(err)
    } else {
        StatusCheck::Warning(err)
    }
}
