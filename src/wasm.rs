// WebAssembly bindings for the converter pages
use crate::convert::{evaluate, ConversionRequest};
use crate::error::ConvertError;
use crate::settings::Settings;
use crate::units::{units_for, QuantityKind};
use wasm_bindgen::prelude::*;

fn js_error(err: &ConvertError) -> JsValue {
    JsValue::from_str(&err.to_json().to_string())
}

fn parse_kind(kind: &str) -> Result<QuantityKind, JsValue> {
    kind.parse::<QuantityKind>().map_err(|e| js_error(&e))
}

#[wasm_bindgen]
pub struct ConverterWasm {
    settings: Settings,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self {
            settings: Settings::empty(),
        }
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Optional TOML with `initial_kind` and `[defaults.<kind>]` tables
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<ConverterWasm, JsValue> {
        let settings = match config_content {
            Some(content) => Settings::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Settings::empty(),
        };
        Ok(Self { settings })
    }

    #[wasm_bindgen]
    pub fn initial_kind(&self) -> String {
        self.settings.initial_kind.to_string()
    }

    /// Kind identifiers in display order
    #[wasm_bindgen]
    pub fn kinds(&self) -> js_sys::Array {
        QuantityKind::ALL
            .iter()
            .map(|kind| JsValue::from_str(kind.as_str()))
            .collect()
    }

    /// Returns JSON array of `{ id, label, factor? }` for dropdown population
    #[wasm_bindgen]
    pub fn units_for(&self, kind: &str) -> Result<String, JsValue> {
        let kind = parse_kind(kind)?;
        serde_json::to_string(units_for(kind))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// Returns JSON `{ from, to }` the form resets to
    #[wasm_bindgen]
    pub fn default_pair(&self, kind: &str) -> Result<String, JsValue> {
        let kind = parse_kind(kind)?;
        serde_json::to_string(&self.settings.default_pair(kind))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize unit pair: {}", e)))
    }

    /// Returns JSON `{ value, formatted }`, or `null` when the input is blank.
    /// Errors are thrown as JSON `{ error_kind, message }`.
    #[wasm_bindgen]
    pub fn convert(
        &self,
        kind: &str,
        from_unit: &str,
        to_unit: &str,
        raw_input: &str,
    ) -> Result<String, JsValue> {
        let kind = parse_kind(kind)?;
        let request = ConversionRequest::new(kind, from_unit, to_unit, raw_input);
        let result = evaluate(&request).map_err(|e| js_error(&e))?;

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}
