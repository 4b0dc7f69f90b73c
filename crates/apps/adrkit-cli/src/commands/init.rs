//! Initialize project command.

use std::fs;
use std::path::Path;

use adrkit_render::DEFAULT_TEMPLATE;
use tracing::debug;

use crate::config::{default_template_path, AdrkitConfig};
use crate::context::ProjectContext;
use crate::error::CliResult;
use crate::output::{InitOutput, OutputFormat, Render};

/// Execute the init command.
///
/// Writes the default configuration and template unless they already
/// exist.
pub fn init(ctx: &ProjectContext, format: OutputFormat) -> CliResult<String> {
    let mut output = InitOutput {
        created: Vec::new(),
        skipped: Vec::new(),
    };

    let config_path = &ctx.config_path;
    if config_path.exists() {
        output.skipped.push(display(ctx, config_path));
    } else {
        AdrkitConfig::default().save(config_path)?;
        output.created.push(display(ctx, config_path));
    }

    let template_path = default_template_path(&ctx.root);
    if template_path.exists() {
        output.skipped.push(display(ctx, &template_path));
    } else {
        if let Some(parent) = template_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&template_path, DEFAULT_TEMPLATE)?;
        output.created.push(display(ctx, &template_path));
    }

    debug!(created = output.created.len(), skipped = output.skipped.len(), "init");
    Ok(output.render(format))
}

/// Path relative to the project root when possible.
fn display(ctx: &ProjectContext, path: &Path) -> String {
    path.strip_prefix(&ctx.root)
        .unwrap_or(path)
        .display()
        .to_string()
}
