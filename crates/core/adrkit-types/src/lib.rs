//! Data structures for adrkit.
//!
//! This crate provides the types shared by the extractor, the validator,
//! the renderer and the CLI. It contains no parsing or I/O, only type
//! definitions with serialization support.
//!
//! # Module Organization
//!
//! - [`enums`] - Enumeration types (DecisionField, DecisionStatus, etc.)
//! - [`constants`] - Tag markers and defaults
//! - [`record`] - Extracted records and their source locations
//! - [`adr`] - Aggregated decision records
//! - [`report`] - Validation report types
//!
//! # Example
//!
//! ```
//! use adrkit_types::{DecisionField, DecisionRecord, DecisionStatus};
//!
//! let mut record = DecisionRecord::new("adr-1");
//! record.set_field(DecisionField::Status, "accepted");
//!
//! assert!(record.is_well_formed());
//! assert_eq!(record.known_status(), Some(DecisionStatus::Accepted));
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adr;
pub mod constants;
pub mod enums;
pub mod record;
pub mod report;

pub use adr::Adr;
pub use constants::*;
pub use enums::{CheckStatus, DecisionField, DecisionStatus, IssueKind, Severity};
pub use record::{DecisionRecord, LocatedRecord, OrphanBlock, SourceLocation};
pub use report::{CheckReport, CheckSummary, Issue};
