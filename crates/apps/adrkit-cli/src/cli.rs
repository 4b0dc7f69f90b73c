//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// adrkit CLI.
#[derive(Parser, Debug)]
#[command(name = "adrkit")]
#[command(author = "adrkit contributors")]
#[command(version)]
#[command(about = "Architecture decision records from source comments")]
#[command(
    long_about = "adrkit collects architecture decision records written as @decision.<field> tags in source comments.\n\nRun 'adrkit init' to create a configuration, then 'adrkit check' to validate."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Project root to scan.
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file (default: <root>/.adrkit/config.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .adrkit directory.
    ///
    /// Writes a default config.toml and template.md. Existing files are
    /// left untouched.
    Init,

    /// Extract decision records from a single file.
    ///
    /// The comment prefix is chosen from the file extension unless
    /// --prefix is given.
    Extract {
        /// File to read.
        file: PathBuf,

        /// Comment prefix to use instead of the configured one (e.g. "--").
        #[arg(short, long)]
        prefix: Option<String>,
    },

    /// Validate every decision record in the project.
    ///
    /// Exits non-zero when any error is found.
    Check {
        /// Treat unknown statuses as errors.
        #[arg(short, long)]
        strict: bool,
    },

    /// List aggregated decisions.
    List {
        /// Only show decisions in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Render decisions as markdown documents.
    ///
    /// Uses the project template if one exists, otherwise the built-in one.
    Render {
        /// Only render the decision with this id.
        #[arg(long)]
        id: Option<String>,
    },

    /// Generate shell completions.
    ///
    /// Outputs shell completion scripts for various shells.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["adrkit", "check", "--strict", "-f", "json", "-r", "/tmp"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Check { strict: true }));
        assert!(matches!(cli.format, OutputFormatArg::Json));
        assert_eq!(cli.root, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_extract_prefix() {
        let cli = Cli::try_parse_from(["adrkit", "extract", "schema.sql", "--prefix=--"]).unwrap();
        match cli.command {
            Commands::Extract { file, prefix } => {
                assert_eq!(file, PathBuf::from("schema.sql"));
                assert_eq!(prefix.as_deref(), Some("--"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
