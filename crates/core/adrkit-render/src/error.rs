//! Render error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing a template.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Template file could not be read
    #[error("failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template has no content
    #[error("template is empty")]
    Empty,

    /// `{{` without a closing `}}`
    #[error("unterminated placeholder at line {line}")]
    Unterminated {
        /// 1-based line of the opening braces
        line: usize,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
