//! Product view component.
//!
//! Projects a [`ProductRecord`] onto a [`Card`]: ten labeled field lines in a
//! fixed order, followed by the reviews section produced by a
//! [`ReviewsRenderer`]. The projection is pure and total; missing values
//! become empty text.

use crate::catalog::{DisplayValue, ProductRecord};

use super::card::{Card, CardField};
use super::reviews::{IterateReviews, ReviewsRenderer};

type FieldAccessor = fn(&ProductRecord) -> &DisplayValue;

/// Card labels paired with the record field they display, in display order.
const CARD_FIELDS: [(&str, FieldAccessor); 10] = [
    ("ID", |record| &record.id),
    ("Brand", |record| &record.brand),
    ("Category", |record| &record.category),
    ("Type", |record| &record.kind),
    ("Description", |record| &record.description),
    ("Weight", |record| &record.weight),
    ("Discount", |record| &record.discount),
    ("Taxes", |record| &record.taxes),
    ("Subtotal", |record| &record.subtotal),
    ("Total", |record| &record.total),
];

/// Component rendering product records as cards.
#[derive(Debug, Clone)]
pub struct ProductView<R = IterateReviews> {
    /// Collaborator for the reviews section.
    reviews: R,
}

impl Default for ProductView<IterateReviews> {
    fn default() -> Self {
        Self::new(IterateReviews)
    }
}

impl<R> ProductView<R> {
    /// Creates a view that delegates the reviews section to `reviews`.
    #[must_use]
    pub const fn new(reviews: R) -> Self {
        Self { reviews }
    }
}

impl<R: ReviewsRenderer> ProductView<R> {
    /// Renders one record as a card.
    ///
    /// The reviews collaborator is invoked exactly once, with the record's
    /// review list as supplied.
    #[must_use]
    pub fn render(&self, record: &ProductRecord) -> Card {
        let fields = CARD_FIELDS
            .iter()
            .map(|&(label, accessor)| CardField {
                label,
                value: accessor(record).to_string(),
            })
            .collect();

        Card {
            id: record.id.to_string(),
            fields,
            reviews: self.reviews.render_reviews(&record.reviews),
        }
    }

    /// Renders each record in order.
    #[must_use]
    pub fn render_all(&self, records: &[ProductRecord]) -> Vec<Card> {
        let cards: Vec<Card> = records.iter().map(|record| self.render(record)).collect();
        tracing::debug!("rendered {} product cards", cards.len());
        cards
    }
}

#[cfg(test)]
#[path = "product_view_tests.rs"]
mod tests;
