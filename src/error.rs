use crate::units::QuantityKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Everything that can stop a conversion from producing a value.
///
/// Input errors (`InvalidNumber`, `NegativeValue`, `OutOfRange`,
/// `InvalidExpression`, `KindMismatch`) come from what the user typed and are meant to be shown
/// inline. The rest point at a wiring mistake between the caller and the
/// registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Value cannot be negative: {0}")]
    NegativeValue(f64),

    #[error("Unknown {kind} unit: '{unit}'")]
    UnknownUnit { kind: QuantityKind, unit: String },

    #[error("Unknown quantity kind: '{0}'")]
    UnknownKind(String),

    #[error("{0} units have no linear conversion factor")]
    NotLinear(QuantityKind),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Result of converting '{0}' is out of range")]
    OutOfRange(String),

    #[error("Cannot convert between {from} and {to}")]
    KindMismatch {
        from: QuantityKind,
        to: QuantityKind,
    },
}

impl ConvertError {
    /// Stable identifier handed to the presentation layer.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::InvalidNumber(_) => "invalid_number",
            ConvertError::NegativeValue(_) => "negative_value",
            ConvertError::UnknownUnit { .. } => "unknown_unit",
            ConvertError::UnknownKind(_) => "unknown_kind",
            ConvertError::NotLinear(_) => "not_linear",
            ConvertError::InvalidExpression(_) => "invalid_expression",
            ConvertError::KindMismatch { .. } => "kind_mismatch",
            ConvertError::OutOfRange(_) => "out_of_range",
        }
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConvertError::InvalidNumber(_)
                | ConvertError::NegativeValue(_)
                | ConvertError::InvalidExpression(_)
                | ConvertError::KindMismatch { .. }
                | ConvertError::OutOfRange(_)
        )
    }

    /// `{ "error_kind": ..., "message": ... }`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error_kind": self.code(),
            "message": self.to_string(),
        })
    }
}
