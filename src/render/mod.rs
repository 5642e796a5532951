//! Card writers.
//!
//! This module serialises rendered [`Card`]s into output formats for
//! terminals, web pages, documentation and tooling.
//!
//! # Supported Formats
//!
//! - **Text**: boxed plain-text cards
//! - **HTML**: card markup with escaped values
//! - **Markdown**: one section per card
//! - **JSONL**: one JSON object per card
//! - **Template**: a user supplied Jinja2 template
//!
//! Every writer is deterministic: the same records produce byte-identical
//! output.

mod format;
mod html;
mod jsonl;
mod markdown;
mod template;
#[doc(hidden)]
pub mod test_helpers;
mod text;

use std::io::Write;

pub use format::CardFormat;
pub use html::write_html;
pub use jsonl::write_jsonl;
pub use markdown::write_markdown;
pub use template::write_template;
pub use text::write_text;

use crate::catalog::ProductRecord;
use crate::error::CardError;
use crate::view::{Card, ProductView, ReviewsRenderer};

/// Where rendered cards are shaped: a built-in format or a user template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutput<'a> {
    /// One of the built-in formats.
    Format(CardFormat),
    /// Raw Jinja2 template source.
    Template(&'a str),
}

/// Renders `records` with `view` and writes them in the requested shape.
///
/// Returns the number of cards written.
///
/// # Errors
///
/// Returns [`CardError::Io`] if writing fails and [`CardError::Template`]
/// if a template fails to compile or render.
pub fn write_cards<W: Write, R: ReviewsRenderer>(
    writer: &mut W,
    view: &ProductView<R>,
    records: &[ProductRecord],
    output: CardOutput<'_>,
) -> Result<usize, CardError> {
    let cards = view.render_all(records);

    match output {
        CardOutput::Format(format) => write_format(writer, &cards, format)?,
        CardOutput::Template(template) => write_template(writer, records, &cards, template)?,
    }

    Ok(cards.len())
}

/// Writes cards in the specified built-in format.
///
/// # Errors
///
/// Returns [`CardError::Io`] if writing fails.
pub fn write_format<W: Write>(
    writer: &mut W,
    cards: &[Card],
    format: CardFormat,
) -> Result<(), CardError> {
    match format {
        CardFormat::Text => write_text(writer, cards),
        CardFormat::Html => write_html(writer, cards),
        CardFormat::Markdown => write_markdown(writer, cards),
        CardFormat::Jsonl => write_jsonl(writer, cards),
    }
}
