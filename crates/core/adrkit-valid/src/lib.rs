//! Validation and aggregation of decision records.
//!
//! Records extracted from source comments are validated one at a time
//! ([`validate_record`], [`validate_status`]), merged by id into
//! [`Adr`](adrkit_types::Adr)s ([`aggregate`]), and summarised into a
//! [`CheckReport`](adrkit_types::CheckReport) ([`check`]).
//!
//! # Example
//!
//! ```
//! use adrkit_extract::{ScanOutput, Extractor};
//! use adrkit_valid::check;
//!
//! let source = "// @decision.id: adr-1\n// @decision.name: Use SQLite\n";
//! let scan = ScanOutput {
//!     records: Extractor::default().scan(source).with_file("db.rs").records,
//!     ..Default::default()
//! };
//!
//! let report = check(&scan, false);
//! assert!(!report.is_failure());
//! assert_eq!(report.summary.valid_annotations, 1);
//! ```

pub mod aggregate;
pub mod check;
pub mod error;
pub mod validate;

pub use aggregate::{aggregate, aggregate_on};
pub use check::check;
pub use error::{ValidationError, ValidationResult};
pub use validate::{validate_record, validate_status, StatusCheck};
