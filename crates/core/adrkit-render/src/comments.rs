//! Rendering records back into tag comments.

use std::fmt::Write;

use adrkit_extract::CommentSyntax;
use adrkit_types::{DecisionRecord, TAG_MARKER, TAG_SEPARATOR};

/// Render a record as a block of tag comments, one line per non-empty
/// field, in canonical field order.
///
/// Extracting the output with the same syntax yields the record again,
/// provided no value contains a line break.
pub fn render_comment_block(record: &DecisionRecord, syntax: &CommentSyntax) -> String {
    let mut out = String::new();
    for (field, value) in record.present_fields() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{} {}{}{} {}",
            syntax.prefix, TAG_MARKER, field, TAG_SEPARATOR, value
        );
    }
    out
}
