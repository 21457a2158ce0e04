use crate::error::{ConvertError, Result};
use crate::units::QuantityKind;
use std::str::FromStr;

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 5] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
        TemperatureScale::Reaumur,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
            TemperatureScale::Rankine => "rankine",
            TemperatureScale::Reaumur => "reaumur",
        }
    }

    pub fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value + KELVIN_OFFSET,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            TemperatureScale::Kelvin => value,
            TemperatureScale::Rankine => value * 5.0 / 9.0,
            TemperatureScale::Reaumur => value * 5.0 / 4.0 + KELVIN_OFFSET,
        }
    }

    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => kelvin - KELVIN_OFFSET,
            TemperatureScale::Fahrenheit => (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => kelvin,
            TemperatureScale::Rankine => kelvin * 9.0 / 5.0,
            TemperatureScale::Reaumur => (kelvin - KELVIN_OFFSET) * 4.0 / 5.0,
        }
    }
}

impl FromStr for TemperatureScale {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        TemperatureScale::ALL
            .into_iter()
            .find(|scale| scale.id() == s)
            .ok_or_else(|| ConvertError::UnknownUnit {
                kind: QuantityKind::Temperature,
                unit: s.to_string(),
            })
    }
}

/// Convert between temperature scales by pivoting through Kelvin.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64> {
    let from_scale: TemperatureScale = from.parse()?;
    let to_scale: TemperatureScale = to.parse()?;

    if from_scale == to_scale {
        return Ok(value);
    }

    let kelvin = from_scale.to_kelvin(value);
    let result = to_scale.from_kelvin(kelvin);
    log::trace!("{} {} -> {} {} (pivot {} K)", value, from, result, to, kelvin);
    Ok(result)
}
