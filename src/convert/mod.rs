// Conversion pipeline: validate the raw text, run the engine for the kind's
// family, format the result. Every step is a pure function of its inputs.

pub mod affine;
pub mod linear;
pub mod radix;

#[cfg(test)]
mod tests;

pub use affine::{convert_temperature, TemperatureScale};
pub use linear::convert_linear;
pub use radix::convert_radix;

use crate::error::{ConvertError, Result};
use crate::format::format_for;
use crate::input::parse_quantity;
use crate::units::{Family, QuantityKind};
use serde::{Deserialize, Serialize};

/// One edit of a converter form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConversionRequest {
    pub kind: QuantityKind,
    pub from_unit: String,
    pub to_unit: String,
    pub raw_input: String,
}

impl ConversionRequest {
    pub fn new(
        kind: QuantityKind,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        raw_input: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            raw_input: raw_input.into(),
        }
    }

    /// Same input with source and target units exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            kind: self.kind,
            from_unit: self.to_unit.clone(),
            to_unit: self.from_unit.clone(),
            raw_input: self.raw_input.clone(),
        }
    }
}

/// A successful conversion, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub formatted: String,
}

/// `Ok(None)` means the input was blank and there is nothing to show.
pub type ConversionResult = Result<Option<Conversion>>;

/// Convert a numeric value between two units of `kind`.
///
/// Number bases convert text to text and go through [`evaluate`] instead.
pub fn convert(kind: QuantityKind, value: f64, from: &str, to: &str) -> Result<f64> {
    match kind.family() {
        Family::Linear => convert_linear(kind, value, from, to),
        Family::Affine => convert_temperature(value, from, to),
        Family::Radix => Err(ConvertError::NotLinear(kind)),
    }
}

/// Run a request through validator, engine and formatter.
pub fn evaluate(request: &ConversionRequest) -> ConversionResult {
    log::debug!(
        "evaluate {} '{}' {} -> {}",
        request.kind,
        request.raw_input,
        request.from_unit,
        request.to_unit
    );

    if request.kind.family() == Family::Radix {
        return convert_radix(&request.raw_input, &request.from_unit, &request.to_unit);
    }

    let value = match parse_quantity(&request.raw_input, request.kind.allows_negative())? {
        Some(value) => value,
        None => {
            // Still reject unknown units so wiring mistakes surface before any input
            convert(request.kind, 0.0, &request.from_unit, &request.to_unit)?;
            return Ok(None);
        }
    };

    let converted = convert(request.kind, value, &request.from_unit, &request.to_unit)?;
    if !converted.is_finite() {
        return Err(ConvertError::OutOfRange(request.raw_input.trim().to_string()));
    }

    Ok(Some(Conversion {
        value: converted,
        formatted: format_for(request.kind, converted),
    }))
}
