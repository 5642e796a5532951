//! Vitrine library crate for rendering product records as cards.
//!
//! A [`ProductView`] projects a [`ProductRecord`] onto a format-neutral
//! [`Card`] of labeled lines and delegates the reviews section to a
//! [`ReviewsRenderer`]. Writers in [`render`] turn cards into text, HTML,
//! Markdown, JSONL, or the output of a user supplied template.

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod view;

pub use catalog::{DisplayValue, ProductRecord, Review, parse_products, read_products};
pub use config::{CliArgs, ConfigLayer, InputSource, OutputMode, OutputSources, VitrineConfig};
pub use error::CardError;
pub use render::{
    CardFormat, CardOutput, write_cards, write_format, write_html, write_jsonl, write_markdown,
    write_template, write_text,
};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
pub use view::{Card, CardField, IterateReviews, ProductView, REVIEWS_HEADING, ReviewsRenderer};
