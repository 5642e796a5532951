//! Opaque field values and their display rules.

use std::fmt;
use std::num::FpCategory;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A product or review field as supplied by the catalog.
///
/// Values are opaque: the card shows them, it never computes with them.
/// Missing values, `null`, booleans and objects have no display form and
/// render as empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DisplayValue {
    /// No displayable content.
    #[default]
    Blank,
    /// Text shown verbatim.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer too large for [`i64`].
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// A sequence shown as the concatenation of its elements.
    List(Vec<DisplayValue>),
}

impl DisplayValue {
    /// Returns `true` when the value renders as empty text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Blank => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.iter().all(Self::is_blank),
            Self::Integer(_) | Self::Unsigned(_) | Self::Float(_) => false,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Unsigned(number) => write!(f, "{number}"),
            Self::Float(number) => write_float(f, *number),
            Self::List(items) => items.iter().try_for_each(|item| item.fmt(f)),
        }
    }
}

/// Smallest magnitude shown in exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitudes below this are shown in exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Writes a float the way a JavaScript string interpolation shows it.
///
/// Integral values drop the fraction (`10`), zero is unsigned, and very
/// large or small magnitudes use an exponent with an explicit sign
/// (`1e+21`, `1e-7`).
fn write_float(f: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    match number.classify() {
        FpCategory::Zero => f.write_str("0"),
        FpCategory::Nan => f.write_str("NaN"),
        FpCategory::Infinite if number.is_sign_negative() => f.write_str("-Infinity"),
        FpCategory::Infinite => f.write_str("Infinity"),
        FpCategory::Normal | FpCategory::Subnormal => {
            let magnitude = number.abs();
            if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
                let exponent_form = format!("{number:e}");
                match exponent_form.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{mantissa}e+{exponent}")
                    }
                    _ => f.write_str(&exponent_form),
                }
            } else {
                write!(f, "{number}")
            }
        }
    }
}

impl From<Value> for DisplayValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) | Value::Object(_) => Self::Blank,
            Value::String(text) => Self::Text(text),
            Value::Number(number) => Self::from(&number),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
        }
    }
}

impl From<&Number> for DisplayValue {
    fn from(number: &Number) -> Self {
        if let Some(signed) = number.as_i64() {
            Self::Integer(signed)
        } else if let Some(unsigned) = number.as_u64() {
            Self::Unsigned(unsigned)
        } else {
            number.as_f64().map_or(Self::Blank, Self::Float)
        }
    }
}

impl From<DisplayValue> for Value {
    fn from(value: DisplayValue) -> Self {
        match value {
            DisplayValue::Blank => Self::Null,
            DisplayValue::Text(text) => Self::String(text),
            DisplayValue::Integer(number) => Self::from(number),
            DisplayValue::Unsigned(number) => Self::from(number),
            DisplayValue::Float(number) => Number::from_f64(number).map_or(Self::Null, Self::Number),
            DisplayValue::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for DisplayValue {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<f64> for DisplayValue {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}
