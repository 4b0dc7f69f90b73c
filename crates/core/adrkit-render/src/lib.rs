//! Rendering of decision records.
//!
//! - [`template`] - Markdown ADR documents from aggregated decisions
//! - [`comments`] - Tag comment blocks from single records

pub mod comments;
pub mod error;
pub mod template;

pub use comments::render_comment_block;
pub use error::{RenderError, RenderResult};
pub use template::{render_adr, Template, DEFAULT_TEMPLATE, PLACEHOLDERS};
