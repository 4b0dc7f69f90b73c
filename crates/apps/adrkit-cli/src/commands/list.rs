//! List aggregated decisions.

use crate::context::ProjectContext;
use crate::error::CliResult;
use crate::output::{DecisionSummary, ListOutput, OutputFormat, Render};

/// Execute the list command.
///
/// Decisions are sorted by id and optionally filtered by category.
pub fn list(ctx: &ProjectContext, format: OutputFormat, category: Option<&str>) -> CliResult<String> {
    let mut decisions: Vec<DecisionSummary> = ctx
        .decisions()?
        .iter()
        .filter(|adr| category.map_or(true, |c| adr.category == c))
        .map(DecisionSummary::from)
        .collect();
    decisions.sort_by(|a, b| a.id.cmp(&b.id));

    let output = ListOutput {
        decisions,
        category: category.map(str::to_string),
    };
    Ok(output.render(format))
}
