//! Command-line interface for adrkit.
//!
//! This crate provides the `adrkit` binary, which collects architecture
//! decision records written as `@decision.<field>` tags in source comments.
//!
//! - **init**: Create `.adrkit/config.toml` and `.adrkit/template.md`
//! - **extract**: Show the records found in one file
//! - **check**: Validate every record in the project (CI friendly)
//! - **list**: Tabulate aggregated decisions
//! - **render**: Print ADR markdown documents
//!
//! # Quick Start
//!
//! ```bash
//! # Create default configuration
//! adrkit init
//!
//! # Fail the build on malformed tags
//! adrkit check --strict
//!
//! # Print ADR-7 as markdown
//! adrkit render --id adr-7 > docs/decisions/adr-7.md
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format`:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Configuration is loaded from `<root>/.adrkit/config.toml`. Override with
//! `--config`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg};
pub use config::AdrkitConfig;
pub use context::ProjectContext;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
