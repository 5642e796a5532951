//! Format-neutral result of rendering one product record.

use serde::Serialize;

/// Heading shown above the reviews section of every card.
pub const REVIEWS_HEADING: &str = "Reviews";

/// One labeled line of a card, such as `Brand: Acme`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    /// Field label shown before the colon.
    pub label: &'static str,
    /// Display text of the field value; empty when the value is missing.
    pub value: String,
}

impl CardField {
    /// Returns the field as it appears on the card: `"<label>: <value>"`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// A rendered product card.
///
/// Writers in [`crate::render`] serialise cards; a card itself carries no
/// formatting beyond the order of its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Display text of the product identifier.
    pub id: String,
    /// Labeled fields in display order.
    pub fields: Vec<CardField>,
    /// Lines produced by the reviews collaborator, one per review.
    pub reviews: Vec<String>,
}

impl Card {
    /// Returns the labeled field lines in display order.
    #[must_use]
    pub fn field_lines(&self) -> Vec<String> {
        self.fields.iter().map(CardField::line).collect()
    }
}
