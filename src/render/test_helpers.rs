//! Shared test utilities for card writer tests.
//!
//! This module provides builders and assertions used by the writer unit
//! tests and the behavioural tests under `tests/`.

use crate::catalog::{DisplayValue, ProductRecord, Review};
use crate::view::{Card, ProductView};

/// Builder for creating test [`ProductRecord`] instances with a fluent API.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    record: ProductRecord,
}

impl ProductBuilder {
    /// Creates a builder for a record with only an identifier.
    pub fn new(id: i64) -> Self {
        Self {
            record: ProductRecord {
                id: DisplayValue::Integer(id),
                ..ProductRecord::default()
            },
        }
    }

    /// Creates a builder for a record with no fields at all.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Creates a builder preloaded with the sample hammer record.
    pub fn hammer() -> Self {
        Self::new(1)
            .brand("Acme")
            .category("Tools")
            .kind("Hammer")
            .description("Steel")
            .number_fields(2, 0, 10, 11)
            .taxes(0.1)
    }

    /// Sets the brand.
    pub fn brand(mut self, brand: &str) -> Self {
        self.record.brand = DisplayValue::from(brand);
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: &str) -> Self {
        self.record.category = DisplayValue::from(category);
        self
    }

    /// Sets the product type.
    pub fn kind(mut self, kind: &str) -> Self {
        self.record.kind = DisplayValue::from(kind);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: &str) -> Self {
        self.record.description = DisplayValue::from(description);
        self
    }

    /// Sets weight, discount, subtotal and total.
    pub fn number_fields(mut self, weight: i64, discount: i64, subtotal: i64, total: i64) -> Self {
        self.record.weight = DisplayValue::Integer(weight);
        self.record.discount = DisplayValue::Integer(discount);
        self.record.subtotal = DisplayValue::Integer(subtotal);
        self.record.total = DisplayValue::Integer(total);
        self
    }

    /// Sets the taxes.
    pub fn taxes(mut self, taxes: f64) -> Self {
        self.record.taxes = DisplayValue::Float(taxes);
        self
    }

    /// Sets the owning shop identifier.
    pub fn shop_id(mut self, shop_id: &str) -> Self {
        self.record.shop_id = DisplayValue::from(shop_id);
        self
    }

    /// Appends a review with a star rating and comment.
    pub fn review(mut self, stars: i64, comment: &str) -> Self {
        self.record.reviews.push(Review {
            stars: DisplayValue::Integer(stars),
            comment: DisplayValue::from(comment),
            ..Review::default()
        });
        self
    }

    /// Builds the [`ProductRecord`] with configured values.
    #[must_use]
    pub fn build(self) -> ProductRecord {
        self.record
    }
}

/// Renders records with the default product view.
#[must_use]
pub fn render_cards(records: &[ProductRecord]) -> Vec<Card> {
    ProductView::default().render_all(records)
}

/// Asserts that `haystack` contains `needle`, returning an error if not.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is absent.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "expected output to contain '{needle}', got:\n{haystack}"
        ))
    }
}

/// Asserts that `haystack` does NOT contain `needle`, returning an error if it does.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is present.
pub fn assert_not_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Err(format!(
            "expected output to NOT contain '{needle}', got:\n{haystack}"
        ))
    } else {
        Ok(())
    }
}
