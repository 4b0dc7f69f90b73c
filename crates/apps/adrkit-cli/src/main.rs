//! adrkit CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use adrkit_cli::{
    cli::{Cli, Commands},
    commands,
    context::ProjectContext,
    error::{CliError, CliResult},
    output::OutputFormat,
};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let filter = if cli.verbose {
            EnvFilter::from_default_env().add_directive("adrkit=debug".parse().unwrap())
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli) {
        if let CliError::CheckFailed { output, .. } = &e {
            println!("{}", output);
        }
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);
}

fn run(cli: Cli) -> CliResult<()> {
    // Get output format
    let format: OutputFormat = cli.format.into();

    // Completions need no project
    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    // Load configuration
    let ctx = ProjectContext::load(&cli.root, cli.config)?;

    // Dispatch command
    let output = match cli.command {
        Commands::Init => commands::init(&ctx, format)?,

        Commands::Extract { file, prefix } => {
            commands::extract(&ctx, format, &file, prefix.as_deref())?
        }

        Commands::Check { strict } => commands::check(&ctx, format, strict)?,

        Commands::List { category } => commands::list(&ctx, format, category.as_deref())?,

        Commands::Render { id } => commands::render(&ctx, format, id.as_deref())?,

        Commands::Completions { shell } => commands::completions(shell)?,
    };

    // Print output
    println!("{}", output);
    Ok(())
}
