use crate::units::QuantityKind;

/// Decimal places (or scientific notation) chosen by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Zero,
    Scientific(usize),
    Fixed(usize),
}

/// Precision tier for general quantities, keyed on `|value|`.
pub fn magnitude_precision(value: f64) -> Precision {
    let abs = value.abs();
    if abs == 0.0 {
        Precision::Zero
    } else if abs < 1e-7 {
        Precision::Scientific(6)
    } else if abs < 1e-5 {
        Precision::Fixed(10)
    } else if abs < 1e-4 {
        Precision::Fixed(8)
    } else if abs < 1e-3 {
        Precision::Fixed(6)
    } else if abs < 1e-2 {
        Precision::Fixed(5)
    } else if abs < 1.0 {
        Precision::Fixed(4)
    } else if abs < 10.0 {
        Precision::Fixed(3)
    } else if abs < 100.0 {
        Precision::Fixed(2)
    } else if abs < 1000.0 {
        Precision::Fixed(1)
    } else {
        Precision::Fixed(0)
    }
}

/// Temperature keeps its own, coarser table.
pub fn temperature_precision(value: f64) -> Precision {
    let abs = value.abs();
    if abs < 0.01 {
        Precision::Fixed(4)
    } else if abs < 10.0 {
        Precision::Fixed(2)
    } else {
        Precision::Fixed(1)
    }
}

pub fn render(value: f64, precision: Precision) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    match precision {
        Precision::Zero => "0".to_string(),
        Precision::Scientific(digits) => format!("{:.*e}", digits, value),
        Precision::Fixed(places) => format!("{:.*}", places, value),
    }
}

pub fn format_magnitude(value: f64) -> String {
    render(value, magnitude_precision(value))
}

pub fn format_temperature(value: f64) -> String {
    render(value, temperature_precision(value))
}

pub fn format_for(kind: QuantityKind, value: f64) -> String {
    match kind {
        QuantityKind::Temperature => format_temperature(value),
        _ => format_magnitude(value),
    }
}
