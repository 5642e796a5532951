//! Parsing product records from JSON input.
//!
//! Three shapes are accepted, and may be mixed in one stream:
//! a JSON array of records, a single record object, or a sequence of
//! record objects separated by whitespace (JSON Lines).

use std::io::Read;

use serde_json::Value;

use crate::error::CardError;

use super::ProductRecord;

/// Parses every product record found in `input`.
///
/// # Errors
///
/// Returns [`CardError::InvalidInput`] when the input is not valid JSON or
/// when a top-level value (or an element of a top-level array) is not an
/// object.
pub fn parse_products(input: &str) -> Result<Vec<ProductRecord>, CardError> {
    let mut records = Vec::new();
    let stream = serde_json::Deserializer::from_str(input).into_iter::<Value>();

    for (index, item) in stream.enumerate() {
        let value = item.map_err(|error| CardError::InvalidInput {
            message: format!("value {}: {error}", index + 1),
        })?;

        if let Value::Array(elements) = value {
            for element in elements {
                let position = records.len() + 1;
                records.push(record_from_value(element, position)?);
            }
        } else {
            let position = records.len() + 1;
            records.push(record_from_value(value, position)?);
        }
    }

    tracing::debug!("parsed {} product records", records.len());
    Ok(records)
}

/// Reads `reader` to the end and parses the product records it holds.
///
/// # Errors
///
/// Returns [`CardError::Io`] if reading fails (including non UTF-8 input)
/// and [`CardError::InvalidInput`] as described on [`parse_products`].
pub fn read_products<R: Read>(mut reader: R) -> Result<Vec<ProductRecord>, CardError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|error| CardError::io(&error))?;
    parse_products(&input)
}

fn record_from_value(value: Value, position: usize) -> Result<ProductRecord, CardError> {
    if !value.is_object() {
        return Err(CardError::InvalidInput {
            message: format!("record {position} is not an object"),
        });
    }

    serde_json::from_value(value).map_err(|error| CardError::InvalidInput {
        message: format!("record {position}: {error}"),
    })
}
