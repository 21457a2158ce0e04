use crate::error::{ConvertError, Result};
use crate::units::{lookup_unit, QuantityKind, Unit};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "<value> <unit>" optionally followed by "to|in|-> <unit>"
    /// Examples: "2.5 hectare to acre", "100 celsius in fahrenheit", "ff hexadecimal->binary", "3 knot"
    static ref EXPRESSION_PATTERN: Regex = Regex::new(
        r"^\s*(\S+)\s+([A-Za-z]+)(?:(?:\s+(?:to|in)\s+|\s*->\s*)([A-Za-z]+))?\s*$"
    ).unwrap();
}

/// A free-text conversion query with its kind inferred from the unit ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: QuantityKind,
    /// Value text as typed; validated later against the kind's rules
    pub raw_value: String,
    pub from_unit: &'static str,
    pub to_unit: Option<&'static str>,
}

pub fn parse_expression(text: &str) -> Result<Expression> {
    let caps = EXPRESSION_PATTERN
        .captures(text)
        .ok_or_else(|| ConvertError::InvalidExpression(text.trim().to_string()))?;

    let raw_value = caps[1].to_string();
    let (kind, from) = resolve_unit(&caps[2])?;

    let to_unit = match caps.get(3) {
        Some(m) => {
            let (to_kind, to) = resolve_unit(m.as_str())?;
            if to_kind != kind {
                return Err(ConvertError::KindMismatch {
                    from: kind,
                    to: to_kind,
                });
            }
            Some(to.id)
        }
        None => None,
    };

    Ok(Expression {
        kind,
        raw_value,
        from_unit: from.id,
        to_unit,
    })
}

fn resolve_unit(id: &str) -> Result<(QuantityKind, &'static Unit)> {
    lookup_unit(id).ok_or_else(|| ConvertError::InvalidExpression(format!("unknown unit '{}'", id)))
}
