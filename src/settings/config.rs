use crate::convert::ConversionRequest;
use crate::settings::validation::ValidationResult;
use crate::units::{find_unit, QuantityKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Source/target units a converter starts with (and resets to).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitPair {
    pub from: String,
    pub to: String,
}

/// Initial state handed to a converter by its host.
///
/// ```toml
/// initial_kind = "temperature"
///
/// [defaults.pressure]
/// from = "bar"
/// to = "psi"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_initial_kind")]
    pub initial_kind: QuantityKind,

    // Keyed by kind name; parsed on use so one bad key doesn't sink the file
    #[serde(default)]
    pub defaults: BTreeMap<String, UnitPair>,
}

fn default_initial_kind() -> QuantityKind {
    QuantityKind::Area
}

fn builtin_pair(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Area => ("squareMeter", "squareFoot"),
        QuantityKind::Energy => ("joule", "calorie"),
        QuantityKind::Pressure => ("bar", "psi"),
        QuantityKind::Speed => ("kilometerPerHour", "milePerHour"),
        QuantityKind::Volume => ("liter", "usGallon"),
        QuantityKind::Mass => ("kilogram", "pound"),
        QuantityKind::Temperature => ("celsius", "fahrenheit"),
        QuantityKind::NumberBase => ("decimal", "binary"),
    }
}

impl Settings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    pub fn empty() -> Self {
        Self {
            initial_kind: default_initial_kind(),
            defaults: BTreeMap::new(),
        }
    }

    /// Configured pair for `kind`, falling back to the built-in one.
    pub fn default_pair(&self, kind: QuantityKind) -> UnitPair {
        self.configured_pair(kind).cloned().unwrap_or_else(|| {
            let (from, to) = builtin_pair(kind);
            UnitPair {
                from: from.to_string(),
                to: to.to_string(),
            }
        })
    }

    /// The canonical key wins over aliases; among aliases the first in key order.
    fn configured_pair(&self, kind: QuantityKind) -> Option<&UnitPair> {
        self.defaults.get(kind.as_str()).or_else(|| {
            self.defaults
                .iter()
                .find(|(key, _)| key.parse::<QuantityKind>().ok() == Some(kind))
                .map(|(_, pair)| pair)
        })
    }

    /// Request in the reset state for `kind`.
    pub fn default_request(&self, kind: QuantityKind, raw_input: &str) -> ConversionRequest {
        let pair = self.default_pair(kind);
        ConversionRequest::new(kind, pair.from, pair.to, raw_input)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut seen: BTreeMap<QuantityKind, &str> = BTreeMap::new();

        for (key, pair) in &self.defaults {
            let kind = match key.parse::<QuantityKind>() {
                Ok(kind) => kind,
                Err(_) => {
                    result.unknown_kind(key);
                    continue;
                }
            };

            if let Some(other) = seen.get(&kind).copied() {
                result.duplicate_kind(kind, key, other);
            } else {
                seen.insert(kind, key.as_str());
            }

            for (side, unit) in [("from", &pair.from), ("to", &pair.to)] {
                if find_unit(kind, unit).is_none() {
                    result.unknown_unit(kind, key, side, unit);
                }
            }

            if pair.from == pair.to {
                result.identical_units(kind, key, &pair.from);
            }
        }

        result
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::empty()
    }
}
