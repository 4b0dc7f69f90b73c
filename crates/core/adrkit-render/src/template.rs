//! Markdown templates for ADR documents.
//!
//! Templates are plain text with `{{name}}` placeholders. Block
//! placeholders (`context`, `decision`, `consequences`) expand to their
//! paragraphs separated by blank lines, or to an HTML TODO comment when
//! the decision has none. Unknown placeholders are left as written.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use adrkit_types::Adr;
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{RenderError, RenderResult};

/// Placeholders understood by [`Template::render`].
pub const PLACEHOLDERS: &[&str] = &[
    "id",
    "name",
    "status",
    "date",
    "category",
    "category_line",
    "context",
    "decision",
    "consequences",
    "locations",
];

/// Template used when a project has none of its own.
pub const DEFAULT_TEMPLATE: &str = "\
# {{id}}: {{name}}

**Status:** {{status}}
**Date:** {{date}}
{{category_line}}
## Context

{{context}}

## Decision

{{decision}}

## Consequences

{{consequences}}

## Code Locations

{{locations}}
";

const CONTEXT_TODO: &str = "<!-- TODO: Add context - what is the issue we're facing? -->";
const DECISION_TODO: &str = "<!-- TODO: Document the decision and rationale -->";
const CONSEQUENCES_TODO: &str = "<!-- TODO: What are the positive/negative outcomes? -->";

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([a-z_]+)\s*\}\}").expect("valid placeholder regex"))
}

/// A parsed markdown template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Parse a template.
    ///
    /// Fails if the text is blank or a `{{` is never closed.
    pub fn new(source: impl Into<String>) -> RenderResult<Self> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(RenderError::Empty);
        }
        check_terminated(&source)?;
        Ok(Self { source })
    }

    /// Read and parse a template file.
    pub fn load(path: &Path) -> RenderResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded template");
        Self::new(source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Expand every known placeholder with values from `adr`.
    pub fn render(&self, adr: &Adr) -> String {
        placeholder_regex()
            .replace_all(&self.source, |caps: &Captures<'_>| {
                value_for(&caps[1], adr).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// Render an ADR document.
pub fn render_adr(adr: &Adr, template: &Template) -> String {
    template.render(adr)
}

fn value_for(placeholder: &str, adr: &Adr) -> Option<String> {
    let value = match placeholder {
        "id" => adr.id.clone(),
        "name" => adr.name.clone(),
        "status" => adr.status.clone(),
        "date" => adr.date.clone(),
        "category" => adr.category.clone(),
        "category_line" if adr.category.is_empty() => String::new(),
        "category_line" => format!("**Category:** {}\n", adr.category),
        "context" => blocks(&adr.context, CONTEXT_TODO),
        "decision" => blocks(&adr.decision, DECISION_TODO),
        "consequences" => blocks(&adr.consequences, CONSEQUENCES_TODO),
        "locations" => adr
            .locations
            .iter()
            .map(|l| format!("- {l}"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };
    Some(value)
}

fn blocks(values: &[String], todo: &str) -> String {
    if values.is_empty() {
        todo.to_string()
    } else {
        values.join("\n\n")
    }
}

fn check_terminated(source: &str) -> RenderResult<()> {
    for (idx, line) in source.lines().enumerate() {
        let mut rest = line;
        while let Some(open) = rest.find("{{") {
            let after = &rest[open + 2..];
            match after.find("}}") {
                Some(close) => rest = &after[close + 2..],
                None => return Err(RenderError::Unterminated { line: idx + 1 }),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adrkit_types::SourceLocation;

    fn sample() -> Adr {
        Adr {
            id: "adr-3".to_string(),
            name: "Use gRPC internally".to_string(),
            status: "accepted".to_string(),
            category: String::new(),
            date: "2024-05-01".to_string(),
            context: vec!["REST was slow.".to_string(), "Schemas drifted.".to_string()],
            decision: vec![],
            consequences: vec![],
            locations: vec![
                SourceLocation::new("svc/a.go", 4),
                SourceLocation::new("svc/b.go", 10),
            ],
        }
    }

    #[test]
    fn test_default_template_layout() {
        let out = Template::default().render(&sample());
        let expected = "\
# adr-3: Use gRPC internally

**Status:** accepted
**Date:** 2024-05-01

## Context

REST was slow.

Schemas drifted.

## Decision

<!-- TODO: Document the decision and rationale -->

## Consequences

<!-- TODO: What are the positive/negative outcomes? -->

## Code Locations

- svc/a.go:4
- svc/b.go:10
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_category_line() {
        let mut adr = sample();
        adr.category = "networking".to_string();
        let out = Template::default().render(&adr);
        assert!(out.contains("**Date:** 2024-05-01\n**Category:** networking\n\n## Context"));
    }

    #[test]
    fn test_unknown_placeholder_untouched() {
        let template = Template::new("{{id}} by {{owner}} / {{ name }}").unwrap();
        assert_eq!(
            template.render(&sample()),
            "adr-3 by {{owner}} / Use gRPC internally"
        );
    }

    #[test]
    fn test_rejects_bad_templates() {
        assert!(matches!(Template::new("  \n"), Err(RenderError::Empty)));
        assert!(matches!(
            Template::new("ok\n# {{id: broken\n"),
            Err(RenderError::Unterminated { line: 2 })
        ));
    }

    #[test]
    fn test_placeholder_list_is_complete() {
        let adr = sample();
        for name in PLACEHOLDERS {
            assert!(value_for(name, &adr).is_some(), "{name} not handled");
        }
    }
}
