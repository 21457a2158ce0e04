use crate::error::Result;
use crate::units::{unit_factor, QuantityKind};

/// Convert through the kind's base unit: `value * factor(from) / factor(to)`.
///
/// Both ids are checked against the registry before the identity shortcut, so
/// a misspelled unit is reported even when `from == to`. Sign and finiteness
/// of `value` are the validator's business.
pub fn convert_linear(kind: QuantityKind, value: f64, from: &str, to: &str) -> Result<f64> {
    let from_factor = unit_factor(kind, from)?;
    let to_factor = unit_factor(kind, to)?;

    if from == to {
        return Ok(value);
    }

    let base = value * from_factor;
    let result = if base.is_finite() {
        base / to_factor
    } else {
        // Base overflowed; the combined ratio may still land in range
        value * (from_factor / to_factor)
    };
    log::trace!(
        "{} {} -> {} {} (base {})",
        value,
        from,
        result,
        to,
        base
    );
    Ok(result)
}
