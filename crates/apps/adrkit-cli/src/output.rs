//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;

use adrkit_types::{Adr, CheckReport, CheckStatus, Issue, LocatedRecord, OrphanBlock};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// Output for the init command.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

impl Render for InitOutput {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();
        for path in &self.created {
            lines.push(format!("{} {}", "Created:".green().bold(), path));
        }
        for path in &self.skipped {
            lines.push(format!("{} {} (already exists)", "Skipped:".yellow(), path));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the extract command.
#[derive(Debug, Serialize)]
pub struct ExtractOutput {
    pub file: String,
    pub records: Vec<LocatedRecord>,
    pub orphans: Vec<OrphanBlock>,
}

impl Render for ExtractOutput {
    fn render_human(&self) -> String {
        if self.records.is_empty() && self.orphans.is_empty() {
            return "No decision records found.".dimmed().to_string();
        }

        let mut lines = Vec::new();
        for located in &self.records {
            let record = &located.record;
            lines.push(format!(
                "{} {}",
                record.id.cyan().bold(),
                format!("(line {})", located.location.line).dimmed()
            ));
            for (field, value) in record.present_fields().skip(1) {
                lines.push(format!("  {} {}", format!("{}:", field).bold(), value));
            }
            lines.push(String::new());
        }
        for orphan in &self.orphans {
            lines.push(format!(
                "{} line {}: tags without an id",
                "Orphaned:".yellow(),
                orphan.location.line
            ));
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the check command.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CheckOutput {
    pub report: CheckReport,
}

impl Render for CheckOutput {
    fn render_human(&self) -> String {
        let report = &self.report;
        let mut lines = vec![format!(
            "Found {} annotation(s)",
            report.summary.total_annotations
        )];

        if report.summary.total_annotations == 0 {
            lines.push("No annotations found - nothing to validate".dimmed().to_string());
            return lines.join("\n");
        }

        for issue in &report.errors {
            lines.push(format!("{} {}", "ERROR:".red().bold(), issue_line(issue)));
        }
        for issue in &report.warnings {
            lines.push(format!("{} {}", "WARNING:".yellow().bold(), issue_line(issue)));
        }

        match report.status {
            CheckStatus::Fail => lines.push(format!(
                "{}",
                format!(
                    "Validation failed with {} error(s)",
                    report.summary.error_count
                )
                .red()
            )),
            CheckStatus::Warning | CheckStatus::Pass => lines.push(format!(
                "{}",
                format!(
                    "Validated {} ADR(s) successfully",
                    report.summary.valid_annotations
                )
                .green()
            )),
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn issue_line(issue: &Issue) -> String {
    if issue.file.is_empty() {
        issue.message.clone()
    } else {
        format!("{}:{} - {}", issue.file, issue.line, issue.message)
    }
}

/// Output for the list command.
#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub decisions: Vec<DecisionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One row of the list table.
#[derive(Debug, Serialize)]
pub struct DecisionSummary {
    pub id: String,
    pub name: String,
    pub status: String,
    pub category: String,
    pub locations: usize,
}

impl From<&Adr> for DecisionSummary {
    fn from(adr: &Adr) -> Self {
        Self {
            id: adr.id.clone(),
            name: adr.name.clone(),
            status: adr.status.clone(),
            category: adr.category.clone(),
            locations: adr.locations.len(),
        }
    }
}

impl Render for ListOutput {
    fn render_human(&self) -> String {
        if self.decisions.is_empty() {
            let msg = match &self.category {
                Some(category) => format!("No ADRs found in category {:?}.", category),
                None => "No annotations found.".to_string(),
            };
            return msg.dimmed().to_string();
        }

        let header = ["ID", "NAME", "STATUS", "CATEGORY", "LOCATIONS"];
        let rows: Vec<[String; 5]> = self
            .decisions
            .iter()
            .map(|d| {
                [
                    d.id.clone(),
                    d.name.clone(),
                    d.status.clone(),
                    if d.category.is_empty() {
                        "-".to_string()
                    } else {
                        d.category.clone()
                    },
                    d.locations.to_string(),
                ]
            })
            .collect();

        let mut widths = header.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = vec![pad_row(&header.map(String::from), &widths)
            .bold()
            .to_string()];
        lines.extend(rows.iter().map(|row| pad_row(row, &widths)));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn pad_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Output for the render command.
#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub documents: Vec<RenderedDocument>,
}

/// One rendered ADR.
#[derive(Debug, Serialize)]
pub struct RenderedDocument {
    pub id: String,
    pub file_name: String,
    pub markdown: String,
}

impl Render for RenderOutput {
    fn render_human(&self) -> String {
        if self.documents.is_empty() {
            return "No annotations found.".dimmed().to_string();
        }
        self.documents
            .iter()
            .map(|d| d.markdown.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
