//! Template-driven card output using Jinja2-compatible syntax.
//!
//! Users supply a template file rendered with `minijinja` to control the
//! structure of the output completely.
//!
//! # Available Variables
//!
//! **Document-level:**
//! - `heading`: the reviews heading (`Reviews`)
//! - `cards`: list of card objects, in input order
//!
//! **Card-level** (inside `{% for card in cards %}`):
//! - `card.id`: product identifier
//! - `card.fields`: list of `{label, value}` objects in display order
//! - `card.lines`: the labeled lines, e.g. `Brand: Acme`
//! - `card.reviews`: review lines from the reviews collaborator
//! - `card.product`: every record field as display text: `id`, `brand`,
//!   `category`, `type`, `description`, `weight`, `discount`, `taxes`,
//!   `subtotal`, `total`, `shop_id`, `stock`, `created_at`, `updated_at`,
//!   and `reviews` (objects with `id`, `stars`, `comment`, `user_id`,
//!   `product_id`, `shop_id`, `created_at`)
//!
//! Undefined variables are errors, so a misspelt field fails loudly instead
//! of rendering as empty text.

use std::io::Write;

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::catalog::{ProductRecord, Review};
use crate::error::CardError;
use crate::view::{Card, CardField, REVIEWS_HEADING};

/// Review fields as display text.
#[derive(Debug, Clone, Serialize)]
struct TemplateReview {
    id: String,
    stars: String,
    comment: String,
    user_id: String,
    product_id: String,
    shop_id: String,
    created_at: String,
}

impl From<&Review> for TemplateReview {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            stars: review.stars.to_string(),
            comment: review.comment.to_string(),
            user_id: review.user_id.to_string(),
            product_id: review.product_id.to_string(),
            shop_id: review.shop_id.to_string(),
            created_at: review.created_at.to_string(),
        }
    }
}

/// Record fields as display text (empty when missing).
#[derive(Debug, Clone, Serialize)]
struct TemplateProduct {
    id: String,
    brand: String,
    category: String,
    #[serde(rename = "type")]
    kind: String,
    description: String,
    weight: String,
    discount: String,
    taxes: String,
    subtotal: String,
    total: String,
    shop_id: String,
    stock: String,
    created_at: String,
    updated_at: String,
    reviews: Vec<TemplateReview>,
}

impl From<&ProductRecord> for TemplateProduct {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id.to_string(),
            brand: record.brand.to_string(),
            category: record.category.to_string(),
            kind: record.kind.to_string(),
            description: record.description.to_string(),
            weight: record.weight.to_string(),
            discount: record.discount.to_string(),
            taxes: record.taxes.to_string(),
            subtotal: record.subtotal.to_string(),
            total: record.total.to_string(),
            shop_id: record.shop_id.to_string(),
            stock: record.stock.to_string(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
            reviews: record.reviews.iter().map(TemplateReview::from).collect(),
        }
    }
}

/// Template context for a single card.
#[derive(Debug, Clone, Serialize)]
struct TemplateCard<'a> {
    id: &'a str,
    fields: &'a [CardField],
    lines: Vec<String>,
    reviews: &'a [String],
    product: TemplateProduct,
}

/// Writes cards using a user-provided Jinja2 template.
///
/// `records` and `cards` are paired by position; `cards[i]` must be the
/// rendering of `records[i]`.
///
/// # Errors
///
/// Returns [`CardError::Template`] if `records` and `cards` differ in
/// length, or if the template has syntax errors, uses unknown filters or
/// references undefined variables. Returns
/// [`CardError::Io`] if writing fails.
///
/// # Example Template
///
/// ```jinja2
/// {% for card in cards %}
/// {{ card.product.brand }} {{ card.product.type }}: {{ card.product.total }}
/// {% endfor %}
/// ```
pub fn write_template<W: Write>(
    writer: &mut W,
    records: &[ProductRecord],
    cards: &[Card],
    template_content: &str,
) -> Result<(), CardError> {
    if records.len() != cards.len() {
        return Err(CardError::Template {
            message: format!(
                "template needs one card per record: got {} records and {} cards",
                records.len(),
                cards.len()
            ),
        });
    }

    let mut env = Environment::new();

    // Users control the output format, so nothing is escaped.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.add_template("cards", template_content)
        .map_err(|e| CardError::Template {
            message: format!("invalid template syntax: {e}"),
        })?;

    let template_cards: Vec<TemplateCard<'_>> = records
        .iter()
        .zip(cards)
        .map(|(record, card)| TemplateCard {
            id: &card.id,
            fields: &card.fields,
            lines: card.field_lines(),
            reviews: &card.reviews,
            product: TemplateProduct::from(record),
        })
        .collect();

    let ctx = context! {
        heading => REVIEWS_HEADING,
        cards => template_cards,
    };

    let tmpl = env.get_template("cards").map_err(|e| CardError::Template {
        message: format!("failed to retrieve template: {e}"),
    })?;

    let output = tmpl.render(ctx).map_err(|e| CardError::Template {
        message: format!("template rendering failed: {e}"),
    })?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| CardError::Io {
            message: format!("failed to write template output: {e}"),
        })?;

    Ok(())
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
