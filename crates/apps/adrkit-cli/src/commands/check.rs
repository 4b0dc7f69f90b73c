//! Validate all annotations in the project.

use adrkit_valid::check as check_scan;

use crate::context::ProjectContext;
use crate::error::{CliError, CliResult};
use crate::output::{CheckOutput, OutputFormat, Render};

/// Execute the check command.
///
/// `strict` is combined with `strict_mode` from the configuration. A
/// failing report is returned as [`CliError::CheckFailed`] carrying the
/// rendered output.
pub fn check(ctx: &ProjectContext, format: OutputFormat, strict: bool) -> CliResult<String> {
    let strict = strict || ctx.config.strict_mode;
    let scan = ctx.scan()?;
    let report = check_scan(&scan, strict);

    let failed = report.is_failure();
    let errors = report.summary.error_count;
    let rendered = CheckOutput { report }.render(format);

    if failed {
        return Err(CliError::CheckFailed {
            errors,
            output: rendered,
        });
    }
    Ok(rendered)
}
