//! Error types exposed by the card rendering pipeline.
//!
//! Projecting a product record onto a card never fails. Errors only arise at
//! the edges: reading input, parsing records, compiling user templates, and
//! writing output.

use thiserror::Error;

/// Errors surfaced while loading records or writing rendered cards.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CardError {
    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Input could not be parsed as product records.
    #[error("invalid product input: {message}")]
    InvalidInput {
        /// Parser detail, including the position of the offending value.
        message: String,
    },

    /// A user supplied template failed to compile or render.
    #[error("template error: {message}")]
    Template {
        /// Details reported by the template engine.
        message: String,
    },
}

impl CardError {
    /// Builds an [`CardError::Io`] from a standard I/O error.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
