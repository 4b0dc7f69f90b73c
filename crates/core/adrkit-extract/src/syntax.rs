//! Comment syntax selection.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// Extensions whose single-line comments start with `#`.
pub const HASH_COMMENT_EXTENSIONS: &[&str] = &["py", "rb", "sh", "bash", "yml", "yaml", "toml"];

/// How single-line comments look in a file, and how far continuation lines
/// must be indented past their tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Comment prefix, e.g. `//` or `#`
    pub prefix: String,
    /// Extra indentation (after the prefix) a continuation line needs
    /// relative to the tag it continues
    pub continuation_indent: usize,
}

impl CommentSyntax {
    /// Default continuation indentation: strictly deeper than the tag.
    pub const DEFAULT_CONTINUATION_INDENT: usize = 1;

    /// Create a syntax with a custom prefix.
    ///
    /// The prefix must be non-empty and free of whitespace.
    pub fn new(prefix: impl Into<String>, continuation_indent: usize) -> ExtractResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(ExtractError::InvalidPrefix { prefix });
        }
        Ok(Self {
            prefix,
            continuation_indent,
        })
    }

    /// `//` comments (C, Rust, JavaScript, Go, ...).
    pub fn slash() -> Self {
        Self {
            prefix: "//".to_string(),
            continuation_indent: Self::DEFAULT_CONTINUATION_INDENT,
        }
    }

    /// `#` comments (Python, Ruby, shell, YAML, TOML).
    pub fn hash() -> Self {
        Self {
            prefix: "#".to_string(),
            continuation_indent: Self::DEFAULT_CONTINUATION_INDENT,
        }
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::slash()
    }
}

/// Maps file extensions to comment syntaxes.
///
/// Extensions are matched case-insensitively and without the leading dot.
/// Files with no extension, or one not in the table, use the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTable {
    default: CommentSyntax,
    by_extension: BTreeMap<String, CommentSyntax>,
}

impl SyntaxTable {
    /// A table where every file uses `syntax`.
    pub fn uniform(syntax: CommentSyntax) -> Self {
        Self {
            default: syntax,
            by_extension: BTreeMap::new(),
        }
    }

    /// Replace the fallback syntax.
    pub fn with_default(mut self, syntax: CommentSyntax) -> Self {
        self.default = syntax;
        self
    }

    /// Set the syntax for one extension.
    pub fn with_extension(mut self, extension: &str, syntax: CommentSyntax) -> Self {
        self.by_extension.insert(normalize_extension(extension), syntax);
        self
    }

    /// Apply one continuation indentation to every entry.
    pub fn with_continuation_indent(mut self, indent: usize) -> Self {
        self.default.continuation_indent = indent;
        for syntax in self.by_extension.values_mut() {
            syntax.continuation_indent = indent;
        }
        self
    }

    /// The fallback syntax.
    pub fn default_syntax(&self) -> &CommentSyntax {
        &self.default
    }

    /// Syntax for a file, chosen by its extension.
    pub fn for_path(&self, path: &Path) -> &CommentSyntax {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.by_extension.get(&normalize_extension(ext)))
            .unwrap_or(&self.default)
    }
}

impl Default for SyntaxTable {
    fn default() -> Self {
        HASH_COMMENT_EXTENSIONS
            .iter()
            .fold(Self::uniform(CommentSyntax::slash()), |table, ext| {
                table.with_extension(ext, CommentSyntax::hash())
            })
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
