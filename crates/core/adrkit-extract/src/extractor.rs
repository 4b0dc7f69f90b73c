//! Line-based extraction of `@decision.<field>` tags.
//!
//! The extractor treats source text as an opaque sequence of lines. It only
//! recognises the comment prefix of the configured [`CommentSyntax`] and the
//! `@decision.` marker; everything else is noise.
//!
//! # Rules
//!
//! - An `id` tag finalizes the record in progress and starts a new one.
//! - Any other recognised tag sets that field on the current record and
//!   opens it for continuation. A repeated field overwrites the earlier one.
//! - A comment line directly after a tag or continuation line, indented at
//!   least `continuation_indent` past the tag and non-empty, is appended to
//!   the open field with a single space.
//! - Blank lines, code lines, empty or shallow comments and new tags close
//!   the open field. Only an `id` tag or end of input closes a record.
//! - Tags seen while no record is in progress form an [`OrphanBlock`].

use adrkit_types::{
    DecisionField, DecisionRecord, LocatedRecord, OrphanBlock, SourceLocation, TAG_MARKER,
    TAG_SEPARATOR,
};
use tracing::trace;

use crate::syntax::CommentSyntax;

/// Extract records from `//`-commented source text.
///
/// Never fails; text without tags yields an empty vector.
pub fn extract(source: &str) -> Vec<DecisionRecord> {
    Extractor::default().extract(source)
}

/// Everything found in one buffer.
///
/// Locations carry 1-based line numbers and an empty file name until
/// [`Extraction::with_file`] stamps them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Well-formed records, in order of their `id` tags
    pub records: Vec<LocatedRecord>,
    /// Tag blocks not attached to any record
    pub orphans: Vec<OrphanBlock>,
}

impl Extraction {
    /// Set the file of every location.
    pub fn with_file(mut self, file: &str) -> Self {
        for located in &mut self.records {
            located.location.file = file.to_string();
        }
        for orphan in &mut self.orphans {
            orphan.location.file = file.to_string();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.orphans.is_empty()
    }

    /// Drop locations and orphans, keeping the records.
    pub fn into_records(self) -> Vec<DecisionRecord> {
        self.records.into_iter().map(|l| l.record).collect()
    }
}

/// Tag extractor for one comment syntax.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    syntax: CommentSyntax,
}

impl Extractor {
    pub fn new(syntax: CommentSyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &CommentSyntax {
        &self.syntax
    }

    /// Extract the well-formed records of `source`, in order.
    pub fn extract(&self, source: &str) -> Vec<DecisionRecord> {
        self.scan(source).into_records()
    }

    /// Extract records with their line numbers, plus orphan blocks.
    pub fn scan(&self, source: &str) -> Extraction {
        let mut state = State::new(self.syntax.continuation_indent);

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            match classify(line, &self.syntax.prefix) {
                Line::Tag(tag) => state.on_tag(tag, line_no),
                Line::Comment { indent, text } => {
                    if !state.on_comment(indent, text) {
                        state.close_block();
                    }
                }
                Line::Other => state.close_block(),
            }
        }

        state.finish()
    }
}

/// A tag line, consumed as soon as it is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawTagLine<'a> {
    /// `None` for unrecognised field names
    field: Option<DecisionField>,
    value: &'a str,
    indent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Tag(RawTagLine<'a>),
    Comment { indent: usize, text: &'a str },
    Other,
}

fn classify<'a>(line: &'a str, prefix: &str) -> Line<'a> {
    let Some(rest) = line.trim_start().strip_prefix(prefix) else {
        return Line::Other;
    };
    let body = rest.trim_start();
    let indent = rest[..rest.len() - body.len()].chars().count();

    if let Some(after) = body.strip_prefix(TAG_MARKER) {
        if let Some((token, value)) = after.split_once(TAG_SEPARATOR) {
            return Line::Tag(RawTagLine {
                field: DecisionField::parse(token.trim()),
                value: value.trim(),
                indent,
            });
        }
    }

    Line::Comment {
        indent,
        text: body.trim_end(),
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenField {
    field: DecisionField,
    indent: usize,
}

struct State {
    continuation_indent: usize,
    out: Extraction,
    current: Option<LocatedRecord>,
    orphan: Option<OrphanBlock>,
    open: Option<OpenField>,
}

impl State {
    fn new(continuation_indent: usize) -> Self {
        Self {
            continuation_indent,
            out: Extraction::default(),
            current: None,
            orphan: None,
            open: None,
        }
    }

    fn on_tag(&mut self, tag: RawTagLine<'_>, line: usize) {
        self.open = None;

        let Some(field) = tag.field else {
            trace!(line = line, "ignoring unrecognised decision tag");
            return;
        };

        if field == DecisionField::Id {
            self.finish_record();
            self.finish_orphan();
            let location = SourceLocation::new(String::new(), line);
            if tag.value.is_empty() {
                self.orphan = Some(OrphanBlock {
                    location,
                    fields: vec![DecisionField::Id],
                });
            } else {
                self.current = Some(LocatedRecord::new(DecisionRecord::new(tag.value), location));
            }
            return;
        }

        match self.current.as_mut() {
            Some(current) => current.record.set_field(field, tag.value),
            None => self
                .orphan
                .get_or_insert_with(|| OrphanBlock {
                    location: SourceLocation::new(String::new(), line),
                    fields: Vec::new(),
                })
                .fields
                .push(field),
        }
        self.open = Some(OpenField {
            field,
            indent: tag.indent,
        });
    }

    /// Returns false when the line does not continue the open field.
    fn on_comment(&mut self, indent: usize, text: &str) -> bool {
        let Some(open) = self.open else {
            return false;
        };
        if text.is_empty() || indent < open.indent + self.continuation_indent {
            return false;
        }

        if let Some(current) = self.current.as_mut() {
            let buf = current.record.field_mut(open.field);
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(text);
        }
        true
    }

    fn close_block(&mut self) {
        self.open = None;
        self.finish_orphan();
    }

    fn finish_record(&mut self) {
        if let Some(located) = self.current.take() {
            trace!(id = %located.record.id, line = located.location.line, "record complete");
            self.out.records.push(located);
        }
    }

    fn finish_orphan(&mut self) {
        if let Some(orphan) = self.orphan.take() {
            trace!(line = orphan.location.line, "orphan tag block");
            self.out.orphans.push(orphan);
        }
    }

    fn finish(mut self) -> Extraction {
        self.finish_record();
        self.finish_orphan();
        self.out
    }
}
