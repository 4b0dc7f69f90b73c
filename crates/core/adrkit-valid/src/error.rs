//! Validation error types.

use adrkit_types::{DecisionField, SourceLocation};
use thiserror::Error;

/// Errors raised while validating or aggregating records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field is empty
    #[error("decision '{id}' is missing required field '{field}'")]
    MissingField {
        /// Id of the record (may be empty)
        id: String,
        /// The missing field
        field: DecisionField,
    },

    /// Two records with the same id disagree on the name
    #[error(
        "conflicting names for {id}: '{first}' at {first_location} vs '{second}' at {second_location}"
    )]
    ConflictingName {
        id: String,
        first: String,
        first_location: SourceLocation,
        second: String,
        second_location: SourceLocation,
    },

    /// Two records with the same id disagree on the category
    #[error(
        "conflicting categories for {id}: '{first}' at {first_location} vs '{second}' at {second_location}"
    )]
    ConflictingCategory {
        id: String,
        first: String,
        first_location: SourceLocation,
        second: String,
        second_location: SourceLocation,
    },

    /// Status outside the well-known set (strict mode)
    #[error("invalid status '{status}': must be one of: {allowed}")]
    InvalidStatus {
        status: String,
        /// Comma-separated list of known statuses
        allowed: String,
    },
}

impl ValidationError {
    /// Location of the record that triggered the error, when known.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::ConflictingName {
                second_location, ..
            }
            | Self::ConflictingCategory {
                second_location, ..
            } => Some(second_location),
            _ => None,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
