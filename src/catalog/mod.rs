//! Catalog data model: product records, reviews and their field values.
//!
//! Records arrive as JSON produced by the catalog backend. Every field is an
//! opaque [`DisplayValue`]; nothing here computes prices or validates
//! business rules.

mod load;
mod model;
mod value;

pub use load::{parse_products, read_products};
pub use model::{ProductRecord, Review};
pub use value::DisplayValue;
