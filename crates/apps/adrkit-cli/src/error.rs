//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scan or syntax error.
    #[error("{0}")]
    Extract(#[from] adrkit_extract::ExtractError),

    /// Aggregation error.
    #[error("{0}")]
    Validation(#[from] adrkit_valid::ValidationError),

    /// Template error.
    #[error("{0}")]
    Render(#[from] adrkit_render::RenderError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// File or directory not found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Decision not found.
    #[error("Decision not found: {0}")]
    NotFound(String),

    /// Check found errors. `output` holds the rendered report.
    #[error("Validation failed with {errors} error(s)")]
    CheckFailed { errors: usize, output: String },
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Validation failures: 1
            Self::CheckFailed { .. } | Self::Validation(_) => 1,
            // Not found: 2
            Self::NotFound(_) | Self::FileNotFound(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) | Self::TomlSerialize(_) | Self::Extract(_) => 3,
            // Template errors: 4
            Self::Render(_) => 4,
            // IO errors: 9
            Self::Io(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::CheckFailed {
                errors: 2,
                output: String::new()
            }
            .exit_code(),
            1
        );
        assert_eq!(CliError::NotFound("adr-1".into()).exit_code(), 2);
        assert_eq!(CliError::config("bad").exit_code(), 3);
    }

    #[test]
    fn test_messages() {
        let err = CliError::CheckFailed {
            errors: 3,
            output: "report".into(),
        };
        assert_eq!(err.to_string(), "Validation failed with 3 error(s)");
        assert_eq!(
            CliError::FileNotFound("a.js".into()).to_string(),
            "File not found: a.js"
        );
    }
}
