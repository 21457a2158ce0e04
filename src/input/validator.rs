use crate::error::{ConvertError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal literal: optional sign, digits with optional fraction, optional exponent.
    /// Rejects the textual forms `f64::from_str` would otherwise accept ("inf", "NaN", "infinity").
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Parse raw text typed into a converter field.
///
/// Returns `Ok(None)` for blank input, which callers treat as "nothing to show"
/// rather than as an error.
pub fn parse_quantity(raw: &str, allow_negative: bool) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !NUMBER_PATTERN.is_match(trimmed) {
        return Err(ConvertError::InvalidNumber(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConvertError::InvalidNumber(trimmed.to_string()))?;

    // 1e400 matches the grammar but overflows to infinity
    if !value.is_finite() {
        return Err(ConvertError::InvalidNumber(trimmed.to_string()));
    }

    if value < 0.0 && !allow_negative {
        return Err(ConvertError::NegativeValue(value));
    }

    Ok(Some(value))
}

/// Whether `text` is a number `parse_quantity` would accept.
pub fn looks_like_number(text: &str) -> bool {
    NUMBER_PATTERN.is_match(text.trim())
}
