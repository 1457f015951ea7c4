//! Price value parsing.
//!
//! The catalog reports "no data" as `null`; those never reach this module.
//! What does reach it is a non-null value that must be a finite decimal.
//! Anything else is a [`MalformedPriceError`], which callers log and treat
//! as an absent price rather than aborting the run.

use thiserror::Error;

/// A non-null price value that is not a finite decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed price value \"{raw}\"")]
pub struct MalformedPriceError {
    pub raw: String,
}

/// Parses a decimal price string such as `"1.859"`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`MalformedPriceError`] if the text is not a number or parses to
/// a non-finite value (`inf`, `NaN`).
pub fn parse_price(raw: &str) -> Result<f64, MalformedPriceError> {
    match raw.trim().parse::<f64>() {
        Ok(value) => validate_price(value),
        Err(_) => Err(MalformedPriceError {
            raw: raw.to_owned(),
        }),
    }
}

/// Accepts an already-numeric price if it is finite.
///
/// # Errors
///
/// Returns [`MalformedPriceError`] for `NaN` and infinities.
pub fn validate_price(value: f64) -> Result<f64, MalformedPriceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MalformedPriceError {
            raw: value.to_string(),
        })
    }
}
