//! Extract records from a single file.

use std::path::Path;

use adrkit_extract::{CommentSyntax, Extractor};

use crate::context::ProjectContext;
use crate::error::{CliError, CliResult};
use crate::output::{ExtractOutput, OutputFormat, Render};

/// Execute the extract command.
pub fn extract(
    ctx: &ProjectContext,
    format: OutputFormat,
    file: &Path,
    prefix: Option<&str>,
) -> CliResult<String> {
    if !file.is_file() {
        return Err(CliError::FileNotFound(file.display().to_string()));
    }

    let syntax = match prefix {
        Some(prefix) => CommentSyntax::new(prefix, ctx.config.syntax.continuation_indent)?,
        None => ctx.config.syntax_table()?.for_path(file).clone(),
    };

    let source = std::fs::read_to_string(file)?;
    let name = file.display().to_string();
    let extraction = Extractor::new(syntax).scan(&source).with_file(&name);

    let output = ExtractOutput {
        file: name,
        records: extraction.records,
        orphans: extraction.orphans,
    };
    Ok(output.render(format))
}
