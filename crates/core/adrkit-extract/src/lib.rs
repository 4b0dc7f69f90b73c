//! Extraction of decision records from source comments.
//!
//! Source files carry `@decision.<field>: value` tags inside single-line
//! comments. This crate turns text into [`DecisionRecord`]s and walks
//! directory trees to collect them.
//!
//! - [`extractor`] - Line-based tag extraction from a text buffer
//! - [`syntax`] - Comment prefixes and per-extension selection
//! - [`scanner`] - Directory walking with exclude globs
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use adrkit_extract::extract;
//!
//! let source = "\
//! // @decision.id: adr-1
//! // @decision.name: Use SQLite
//! // @decision.context: Single binary deployment
//! //   with no server process.
//! ";
//!
//! let records = extract(source);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].context, "Single binary deployment with no server process.");
//! ```
//!
//! [`DecisionRecord`]: adrkit_types::DecisionRecord

pub mod error;
pub mod extractor;
pub mod scanner;
pub mod syntax;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{extract, Extraction, Extractor};
pub use scanner::{ExcludeSet, ScanOutput, Scanner};
pub use syntax::{CommentSyntax, SyntaxTable};
