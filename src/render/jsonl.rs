//! JSONL (JSON Lines) card writer.
//!
//! One JSON object per card, suitable for downstream tooling.

use std::io::Write;

use crate::error::CardError;
use crate::view::Card;

/// Writes cards in JSONL format to the given writer.
///
/// Each card is serialised as `{"id", "fields": [{"label", "value"}],
/// "reviews": [...]}` on its own line.
///
/// # Errors
///
/// Returns [`CardError::Io`] if writing or serialisation fails.
pub fn write_jsonl<W: Write>(writer: &mut W, cards: &[Card]) -> Result<(), CardError> {
    for card in cards {
        serde_json::to_writer(&mut *writer, card).map_err(|e| CardError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| CardError::io(&e))?;
    }
    Ok(())
}
