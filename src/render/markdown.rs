//! Markdown card writer.

use std::io::Write;

use crate::error::CardError;
use crate::view::{Card, REVIEWS_HEADING};

/// Writes cards as Markdown sections.
///
/// Each card gets a `## Product <id>` heading, a bullet per labeled field
/// and a reviews subsection. Catalog text is escaped so it cannot open
/// headings, emphasis, links or inline HTML, and line breaks inside a value
/// become spaces so every value stays on its own line.
///
/// # Errors
///
/// Returns [`CardError::Io`] if writing to the output fails.
pub fn write_markdown<W: Write>(writer: &mut W, cards: &[Card]) -> Result<(), CardError> {
    for card in cards {
        write_card_section(writer, card)?;
    }
    Ok(())
}

fn write_card_section<W: Write>(writer: &mut W, card: &Card) -> Result<(), CardError> {
    let title = if card.id.is_empty() {
        "(no id)".to_owned()
    } else {
        escape_markdown(&card.id)
    };
    writeln!(writer, "## Product {title}").map_err(|e| CardError::io(&e))?;
    writeln!(writer).map_err(|e| CardError::io(&e))?;

    for field in &card.fields {
        writeln!(writer, "- **{}:** {}", field.label, escape_markdown(&field.value))
            .map_err(|e| CardError::io(&e))?;
    }

    writeln!(writer).map_err(|e| CardError::io(&e))?;
    writeln!(writer, "### {REVIEWS_HEADING}").map_err(|e| CardError::io(&e))?;
    writeln!(writer).map_err(|e| CardError::io(&e))?;

    if card.reviews.is_empty() {
        writeln!(writer, "_No reviews._").map_err(|e| CardError::io(&e))?;
    }
    for review in &card.reviews {
        writeln!(writer, "- {}", escape_markdown(review)).map_err(|e| CardError::io(&e))?;
    }

    writeln!(writer).map_err(|e| CardError::io(&e))?;
    Ok(())
}

/// Characters with inline meaning in Markdown or HTML.
const MARKDOWN_SPECIAL: [char; 10] = ['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|'];

/// Backslash-escapes Markdown syntax and folds line breaks into spaces.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                escaped.push(' ');
            }
            '\n' => escaped.push(' '),
            special if MARKDOWN_SPECIAL.contains(&special) => {
                escaped.push('\\');
                escaped.push(special);
            }
            other => escaped.push(other),
        }
    }
    escaped
}
