use crate::convert::Conversion;
use crate::error::{ConvertError, Result};
use crate::units::QuantityKind;

fn radix_of(unit: &str) -> Result<(u32, &'static str)> {
    match unit {
        "binary" => Ok((2, "0b")),
        "octal" => Ok((8, "0o")),
        "decimal" => Ok((10, "")),
        "hexadecimal" => Ok((16, "0x")),
        _ => Err(ConvertError::UnknownUnit {
            kind: QuantityKind::NumberBase,
            unit: unit.to_string(),
        }),
    }
}

/// Parse digits written in `unit`'s base. Blank input yields `None`.
pub fn parse_radix(raw: &str, unit: &str) -> Result<Option<u64>> {
    let (radix, prefix) = radix_of(unit)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        if rest.starts_with('-') {
            return Err(ConvertError::InvalidNumber(trimmed.to_string()));
        }
        return match parse_radix(rest, unit) {
            // "-0" is still zero
            Ok(Some(0)) => Ok(Some(0)),
            Ok(Some(magnitude)) => Err(ConvertError::NegativeValue(-(magnitude as f64))),
            _ => Err(ConvertError::InvalidNumber(trimmed.to_string())),
        };
    }

    let lower = trimmed.to_lowercase();
    let digits = if !prefix.is_empty() {
        lower.strip_prefix(prefix).unwrap_or(&lower)
    } else {
        lower.as_str()
    };

    // from_str_radix accepts a leading '+', which is not a digit here
    if digits.is_empty() || digits.starts_with('+') {
        return Err(ConvertError::InvalidNumber(trimmed.to_string()));
    }

    u64::from_str_radix(digits, radix)
        .map(Some)
        .map_err(|_| ConvertError::InvalidNumber(trimmed.to_string()))
}

pub fn render_radix(value: u64, unit: &str) -> Result<String> {
    let (radix, _) = radix_of(unit)?;
    Ok(match radix {
        2 => format!("{:b}", value),
        8 => format!("{:o}", value),
        16 => format!("{:x}", value),
        _ => value.to_string(),
    })
}

/// Re-express an integer typed in one base in another.
///
/// `value` of the result is the integer itself, exact up to 2^53.
pub fn convert_radix(raw: &str, from: &str, to: &str) -> Result<Option<Conversion>> {
    // Validate the target before reading any input
    radix_of(to)?;
    let parsed = match parse_radix(raw, from)? {
        Some(n) => n,
        None => return Ok(None),
    };

    let formatted = render_radix(parsed, to)?;
    log::trace!("{} ({}) -> {} ({})", raw.trim(), from, formatted, to);
    Ok(Some(Conversion {
        value: parsed as f64,
        formatted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radix() {
        assert_eq!(parse_radix("ff", "hexadecimal"), Ok(Some(255)));
        assert_eq!(parse_radix("0xFF", "hexadecimal"), Ok(Some(255)));
        assert_eq!(parse_radix("0b1010", "binary"), Ok(Some(10)));
        assert_eq!(parse_radix(" 777 ", "octal"), Ok(Some(511)));
        assert_eq!(parse_radix("42", "decimal"), Ok(Some(42)));
        assert_eq!(parse_radix("", "binary"), Ok(None));
    }

    #[test]
    fn test_invalid_digits() {
        assert!(matches!(
            parse_radix("102", "binary"),
            Err(ConvertError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_radix("0x", "hexadecimal"),
            Err(ConvertError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_radix("+5", "decimal"),
            Err(ConvertError::InvalidNumber(_))
        ));
        // Larger than u64
        assert!(matches!(
            parse_radix("18446744073709551616", "decimal"),
            Err(ConvertError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            parse_radix("-5", "decimal"),
            Err(ConvertError::NegativeValue(-5.0))
        );
        assert_eq!(
            parse_radix("-0x10", "hexadecimal"),
            Err(ConvertError::NegativeValue(-16.0))
        );
        assert!(matches!(
            parse_radix("-", "decimal"),
            Err(ConvertError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_radix("--5", "decimal"),
            Err(ConvertError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_render_radix() {
        assert_eq!(render_radix(255, "binary").unwrap(), "11111111");
        assert_eq!(render_radix(255, "octal").unwrap(), "377");
        assert_eq!(render_radix(255, "hexadecimal").unwrap(), "ff");
        assert_eq!(render_radix(255, "decimal").unwrap(), "255");
        assert!(render_radix(255, "base64").is_err());
    }

    #[test]
    fn test_convert_radix() {
        let result = convert_radix("ff", "hexadecimal", "binary").unwrap().unwrap();
        assert_eq!(result.formatted, "11111111");
        assert_eq!(result.value, 255.0);
        assert_eq!(convert_radix("  ", "hexadecimal", "binary"), Ok(None));
    }

    #[test]
    fn test_unknown_target_checked_first() {
        assert!(matches!(
            convert_radix("zz", "decimal", "base3"),
            Err(ConvertError::UnknownUnit { .. })
        ));
    }
}
