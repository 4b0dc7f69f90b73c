//! Error types for extraction and scanning.
//!
//! Extraction of a text buffer never fails; these errors come from
//! building a scanner or walking the filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running a scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Scan root does not exist
    #[error("scan root not found: {}", path.display())]
    RootNotFound {
        /// The missing path
        path: PathBuf,
    },

    /// Exclude glob could not be compiled
    #[error("invalid exclude pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// What is wrong with it
        reason: String,
    },

    /// Comment prefix is empty or contains whitespace
    #[error("invalid comment prefix '{prefix}'")]
    InvalidPrefix {
        /// The offending prefix
        prefix: String,
    },
}

/// Result type for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
