//! Render decisions as markdown.

use adrkit_render::render_adr;

use crate::context::ProjectContext;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Render, RenderOutput, RenderedDocument};

/// Execute the render command.
///
/// Documents are ordered by id.
pub fn render(ctx: &ProjectContext, format: OutputFormat, id: Option<&str>) -> CliResult<String> {
    let template = ctx.template()?;
    let mut adrs = ctx.decisions()?;

    if let Some(id) = id {
        adrs.retain(|adr| adr.id == id);
        if adrs.is_empty() {
            return Err(CliError::NotFound(id.to_string()));
        }
    }

    adrs.sort_by(|a, b| a.id.cmp(&b.id));

    let documents = adrs
        .iter()
        .map(|adr| RenderedDocument {
            id: adr.id.clone(),
            file_name: adr.file_name(),
            markdown: render_adr(adr, &template),
        })
        .collect();

    Ok(RenderOutput { documents }.render(format))
}
