//! Tag markers and defaults shared across crates.

/// Marker that introduces a tag inside a comment: `@decision.<field>: value`.
pub const TAG_MARKER: &str = "@decision.";

/// Separator between the field name and the inline value of a tag.
pub const TAG_SEPARATOR: char = ':';

/// Status assigned to an aggregated decision whose records carry none.
pub const DEFAULT_STATUS: &str = "proposed";

/// Date format of `Adr::date` (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Directory (relative to the project root) holding adrkit's own files.
pub const CONFIG_DIR: &str = ".adrkit";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Template file name inside [`CONFIG_DIR`].
pub const TEMPLATE_FILE: &str = "template.md";
