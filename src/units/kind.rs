use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dimension with its own closed set of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Area,
    Energy,
    Pressure,
    Speed,
    Volume,
    #[serde(alias = "weight")]
    Mass,
    Temperature,
    #[serde(alias = "number-base", alias = "number_base")]
    NumberBase,
}

/// How values of a kind move between units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Pure scale factor through a base unit
    Linear,
    /// Scale plus offset (temperature)
    Affine,
    /// Positional notation, string to string
    Radix,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Area,
        QuantityKind::Energy,
        QuantityKind::Pressure,
        QuantityKind::Speed,
        QuantityKind::Volume,
        QuantityKind::Mass,
        QuantityKind::Temperature,
        QuantityKind::NumberBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Area => "area",
            QuantityKind::Energy => "energy",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Speed => "speed",
            QuantityKind::Volume => "volume",
            QuantityKind::Mass => "mass",
            QuantityKind::Temperature => "temperature",
            QuantityKind::NumberBase => "numberbase",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            QuantityKind::Temperature => Family::Affine,
            QuantityKind::NumberBase => Family::Radix,
            _ => Family::Linear,
        }
    }

    /// Sub-zero temperatures are physical; every other quantity here is a magnitude.
    pub fn allows_negative(&self) -> bool {
        matches!(self, QuantityKind::Temperature)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityKind {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "area" => Ok(QuantityKind::Area),
            "energy" => Ok(QuantityKind::Energy),
            "pressure" => Ok(QuantityKind::Pressure),
            "speed" => Ok(QuantityKind::Speed),
            "volume" => Ok(QuantityKind::Volume),
            "mass" | "weight" => Ok(QuantityKind::Mass),
            "temperature" => Ok(QuantityKind::Temperature),
            "numberbase" | "number-base" | "number_base" => Ok(QuantityKind::NumberBase),
            _ => Err(ConvertError::UnknownKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        for kind in QuantityKind::ALL {
            assert_eq!(kind.as_str().parse::<QuantityKind>().unwrap(), kind);
        }
        assert_eq!("Weight".parse::<QuantityKind>().unwrap(), QuantityKind::Mass);
        assert_eq!(
            "number-base".parse::<QuantityKind>().unwrap(),
            QuantityKind::NumberBase
        );
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "length".parse::<QuantityKind>().unwrap_err();
        assert_eq!(err, ConvertError::UnknownKind("length".to_string()));
    }

    #[test]
    fn test_families() {
        assert_eq!(QuantityKind::Temperature.family(), Family::Affine);
        assert_eq!(QuantityKind::NumberBase.family(), Family::Radix);
        assert_eq!(QuantityKind::Pressure.family(), Family::Linear);
        assert!(QuantityKind::Temperature.allows_negative());
        assert!(!QuantityKind::Volume.allows_negative());
        assert!(!QuantityKind::NumberBase.allows_negative());
    }

    #[test]
    fn test_serde_names() {
        let kind: QuantityKind = serde_json::from_str("\"weight\"").unwrap();
        assert_eq!(kind, QuantityKind::Mass);
        for alias in ["\"number-base\"", "\"number_base\""] {
            let kind: QuantityKind = serde_json::from_str(alias).unwrap();
            assert_eq!(kind, QuantityKind::NumberBase);
        }
        assert_eq!(
            serde_json::to_string(&QuantityKind::NumberBase).unwrap(),
            "\"numberbase\""
        );
    }
}
