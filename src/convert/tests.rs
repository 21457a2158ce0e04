#[cfg(test)]
mod tests {
    use super::super::{convert, evaluate, ConversionRequest};
    use crate::error::ConvertError;
    use crate::units::{units_for, Family, QuantityKind};

    const SAMPLES: [f64; 7] = [0.0, 1e-9, 0.003, 1.0, 42.5, 98_765.4321, 1e12];

    fn numeric_kinds() -> impl Iterator<Item = QuantityKind> {
        QuantityKind::ALL
            .into_iter()
            .filter(|k| k.family() != Family::Radix)
    }

    #[test]
    fn test_identity_for_every_unit() {
        for kind in numeric_kinds() {
            for unit in units_for(kind) {
                for value in SAMPLES {
                    assert_eq!(
                        convert(kind, value, unit.id, unit.id).unwrap(),
                        value,
                        "{} {} identity",
                        kind,
                        unit.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_for_every_pair() {
        for kind in numeric_kinds() {
            let units = units_for(kind);
            for a in units {
                for b in units {
                    for value in SAMPLES {
                        let there = convert(kind, value, a.id, b.id).unwrap();
                        let back = convert(kind, there, b.id, a.id).unwrap();
                        // Temperature offsets make 0 a poor base for a relative check
                        let scale = match kind.family() {
                            Family::Affine => value.abs().max(1.0),
                            _ => value.abs(),
                        };
                        assert!(
                            (back - value).abs() <= 1e-9 * scale,
                            "{}: {} {} -> {} -> {} (got {})",
                            kind,
                            value,
                            a.id,
                            b.id,
                            a.id,
                            back
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_linear_monotonic() {
        for kind in numeric_kinds().filter(|k| k.family() == Family::Linear) {
            let units = units_for(kind);
            for a in units {
                for b in units {
                    let mut previous = convert(kind, 0.0, a.id, b.id).unwrap();
                    for value in [0.5, 1.0, 2.0, 1e3, 1e6] {
                        let current = convert(kind, value, a.id, b.id).unwrap();
                        assert!(current > previous, "{} {} -> {}", kind, a.id, b.id);
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn test_number_base_is_not_numeric() {
        assert_eq!(
            convert(QuantityKind::NumberBase, 1.0, "decimal", "binary"),
            Err(ConvertError::NotLinear(QuantityKind::NumberBase))
        );
    }

    #[test]
    fn test_evaluate_formats_by_kind() {
        let result = evaluate(&ConversionRequest::new(
            QuantityKind::Pressure,
            "bar",
            "psi",
            "1",
        ))
        .unwrap()
        .unwrap();
        assert_eq!(result.formatted, "14.50");

        let result = evaluate(&ConversionRequest::new(
            QuantityKind::Temperature,
            "celsius",
            "fahrenheit",
            "100",
        ))
        .unwrap()
        .unwrap();
        assert_eq!(result.formatted, "212.0");

        let result = evaluate(&ConversionRequest::new(
            QuantityKind::Mass,
            "gram",
            "kilogram",
            "12345000",
        ))
        .unwrap()
        .unwrap();
        assert_eq!(result.formatted, "12345");
    }

    #[test]
    fn test_evaluate_empty_and_zero_differ() {
        let empty = ConversionRequest::new(QuantityKind::Area, "acre", "hectare", "");
        assert_eq!(evaluate(&empty), Ok(None));

        let zero = ConversionRequest::new(QuantityKind::Area, "acre", "hectare", "0");
        let result = evaluate(&zero).unwrap().unwrap();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.formatted, "0");
    }

    #[test]
    fn test_evaluate_errors() {
        let bad = ConversionRequest::new(QuantityKind::Volume, "liter", "usGallon", "abc");
        assert!(matches!(evaluate(&bad), Err(ConvertError::InvalidNumber(_))));

        let negative = ConversionRequest::new(QuantityKind::Volume, "liter", "usGallon", "-5");
        assert_eq!(evaluate(&negative), Err(ConvertError::NegativeValue(-5.0)));

        let cold = ConversionRequest::new(QuantityKind::Temperature, "celsius", "kelvin", "-5");
        assert_eq!(evaluate(&cold).unwrap().unwrap().formatted, "268.1");

        let unknown = ConversionRequest::new(QuantityKind::Area, "lightyear", "squareMeter", "");
        assert!(matches!(
            evaluate(&unknown),
            Err(ConvertError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_evaluate_rejects_out_of_range_results() {
        let overflow = ConversionRequest::new(QuantityKind::Mass, "metricTon", "microgram", "1e300");
        assert_eq!(
            evaluate(&overflow),
            Err(ConvertError::OutOfRange("1e300".to_string()))
        );

        let hot = ConversionRequest::new(QuantityKind::Temperature, "kelvin", "fahrenheit", "1.7e308");
        assert!(matches!(evaluate(&hot), Err(ConvertError::OutOfRange(_))));

        // Finite answer even though the value in grams is not
        let tons = ConversionRequest::new(QuantityKind::Mass, "usTon", "imperialTon", "1e305");
        let result = evaluate(&tons).unwrap().unwrap();
        assert!((result.value / 1e305 - 2000.0 / 2240.0).abs() < 1e-9);
        assert_eq!(result.formatted.len(), 305);
    }

    #[test]
    fn test_evaluate_number_base() {
        let request = ConversionRequest::new(QuantityKind::NumberBase, "decimal", "hexadecimal", "255");
        let result = evaluate(&request).unwrap().unwrap();
        assert_eq!(result.formatted, "ff");

        let back = evaluate(&ConversionRequest {
            raw_input: result.formatted.clone(),
            ..request.swapped()
        })
        .unwrap()
        .unwrap();
        assert_eq!(back.formatted, "255");
    }

    #[test]
    fn test_evaluate_is_referentially_transparent() {
        let requests = [
            ConversionRequest::new(QuantityKind::Energy, "kilowattHour", "btu", "3.2"),
            ConversionRequest::new(QuantityKind::Speed, "knot", "milePerHour", "oops"),
            ConversionRequest::new(QuantityKind::Temperature, "rankine", "reaumur", "-12"),
            ConversionRequest::new(QuantityKind::NumberBase, "binary", "octal", "101101"),
        ];
        for request in &requests {
            assert_eq!(evaluate(request), evaluate(request));
        }
    }

    #[test]
    fn test_swapped() {
        let request = ConversionRequest::new(QuantityKind::Speed, "knot", "kilometerPerHour", "10");
        let swapped = request.swapped();
        assert_eq!(swapped.from_unit, "kilometerPerHour");
        assert_eq!(swapped.to_unit, "knot");
        assert_eq!(swapped.raw_input, "10");
        assert_eq!(swapped.swapped(), request);
    }
}
