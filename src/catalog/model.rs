//! Product and review records as delivered by the catalog.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::DisplayValue;

/// One catalog item, including its computed pricing fields and reviews.
///
/// Every field is optional on input; anything missing becomes
/// [`DisplayValue::Blank`] and renders as empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// Product identifier.
    pub id: DisplayValue,
    /// Brand name.
    pub brand: DisplayValue,
    /// Catalog category.
    pub category: DisplayValue,
    /// Product type within the category.
    #[serde(rename = "type")]
    pub kind: DisplayValue,
    /// Free-form description.
    pub description: DisplayValue,
    /// Shipping weight.
    pub weight: DisplayValue,
    /// Discount applied to the subtotal.
    pub discount: DisplayValue,
    /// Taxes applied to the subtotal.
    pub taxes: DisplayValue,
    /// Price before discount and taxes.
    pub subtotal: DisplayValue,
    /// Final price.
    pub total: DisplayValue,
    /// Reviews in the order the catalog supplied them.
    #[serde(deserialize_with = "reviews_or_empty")]
    pub reviews: Vec<Review>,
    /// Owning shop identifier.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub shop_id: DisplayValue,
    /// Units in stock.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub stock: DisplayValue,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub created_at: DisplayValue,
    /// Last update timestamp.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub updated_at: DisplayValue,
}

/// A customer review attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review identifier.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub id: DisplayValue,
    /// Star rating out of five.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub stars: DisplayValue,
    /// Review text.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub comment: DisplayValue,
    /// Author identifier.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub user_id: DisplayValue,
    /// Reviewed product identifier.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub product_id: DisplayValue,
    /// Reviewed shop identifier.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub shop_id: DisplayValue,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "DisplayValue::is_blank")]
    pub created_at: DisplayValue,
}

/// Accepts `null`, a missing field, or an array of review objects.
///
/// Entries that are not objects cannot describe a review and are dropped;
/// a non-array value is treated as no reviews.
fn reviews_or_empty<'de, D>(deserializer: D) -> Result<Vec<Review>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let entries = match raw {
        Value::Null => return Ok(Vec::new()),
        Value::Array(entries) => entries,
        other => {
            tracing::warn!("ignoring reviews field that is not a list: {other}");
            return Ok(Vec::new());
        }
    };

    let mut reviews = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!("ignoring review {} that is not an object", position + 1);
            continue;
        }
        reviews.push(serde_json::from_value(entry).map_err(serde::de::Error::custom)?);
    }
    Ok(reviews)
}
