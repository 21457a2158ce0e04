// Static unit tables. Factors convert one unit into the kind's base unit:
// area m², energy J, pressure Pa, speed m/s, volume m³, mass g.

use crate::error::{ConvertError, Result};
use crate::units::kind::QuantityKind;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

const fn linear(id: &'static str, label: &'static str, factor: f64) -> Unit {
    Unit {
        id,
        label,
        factor: Some(factor),
    }
}

const fn scale(id: &'static str, label: &'static str) -> Unit {
    Unit {
        id,
        label,
        factor: None,
    }
}

static AREA: [Unit; 10] = [
    linear("squareMeter", "Square meter (m²)", 1.0),
    linear("squareKilometer", "Square kilometer (km²)", 1.0e6),
    linear("squareCentimeter", "Square centimeter (cm²)", 1.0e-4),
    linear("squareMillimeter", "Square millimeter (mm²)", 1.0e-6),
    linear("hectare", "Hectare (ha)", 1.0e4),
    linear("acre", "Acre (ac)", 4046.8564224),
    linear("squareMile", "Square mile (mi²)", 2_589_988.110336),
    linear("squareYard", "Square yard (yd²)", 0.83612736),
    linear("squareFoot", "Square foot (ft²)", 0.09290304),
    linear("squareInch", "Square inch (in²)", 0.00064516),
];

static ENERGY: [Unit; 11] = [
    linear("joule", "Joule (J)", 1.0),
    linear("kilojoule", "Kilojoule (kJ)", 1.0e3),
    linear("megajoule", "Megajoule (MJ)", 1.0e6),
    linear("calorie", "Calorie (cal)", 4.184),
    linear("kilocalorie", "Kilocalorie (kcal)", 4184.0),
    linear("wattHour", "Watt-hour (Wh)", 3600.0),
    linear("kilowattHour", "Kilowatt-hour (kWh)", 3.6e6),
    linear("electronvolt", "Electronvolt (eV)", 1.602176634e-19),
    linear("btu", "British thermal unit (BTU)", 1055.05585262),
    linear("footPound", "Foot-pound (ft·lbf)", 1.3558179483314004),
    linear("erg", "Erg (erg)", 1.0e-7),
];

static PRESSURE: [Unit; 10] = [
    linear("pascal", "Pascal (Pa)", 1.0),
    linear("kilopascal", "Kilopascal (kPa)", 1.0e3),
    linear("megapascal", "Megapascal (MPa)", 1.0e6),
    linear("bar", "Bar (bar)", 1.0e5),
    linear("millibar", "Millibar (mbar)", 100.0),
    linear("atmosphere", "Atmosphere (atm)", 101_325.0),
    linear("psi", "Pound per square inch (psi)", 6894.757293168361),
    linear("torr", "Torr (Torr)", 101_325.0 / 760.0),
    linear("mmHg", "Millimeter of mercury (mmHg)", 133.322387415),
    linear("inHg", "Inch of mercury (inHg)", 3386.389),
];

static SPEED: [Unit; 6] = [
    linear("meterPerSecond", "Meter per second (m/s)", 1.0),
    linear("kilometerPerHour", "Kilometer per hour (km/h)", 1.0 / 3.6),
    linear("milePerHour", "Mile per hour (mph)", 0.44704),
    linear("knot", "Knot (kn)", 1852.0 / 3600.0),
    linear("footPerSecond", "Foot per second (ft/s)", 0.3048),
    linear("mach", "Mach (at sea level)", 340.29),
];

static VOLUME: [Unit; 14] = [
    linear("cubicMeter", "Cubic meter (m³)", 1.0),
    linear("liter", "Liter (L)", 1.0e-3),
    linear("milliliter", "Milliliter (mL)", 1.0e-6),
    linear("cubicCentimeter", "Cubic centimeter (cm³)", 1.0e-6),
    linear("usGallon", "US gallon (gal)", 0.003785411784),
    linear("usQuart", "US quart (qt)", 0.000946352946),
    linear("usPint", "US pint (pt)", 0.000473176473),
    linear("usCup", "US cup (cup)", 0.0002365882365),
    linear("usFluidOunce", "US fluid ounce (fl oz)", 2.95735295625e-5),
    linear("tablespoon", "Tablespoon (tbsp)", 1.478676478125e-5),
    linear("teaspoon", "Teaspoon (tsp)", 4.92892159375e-6),
    linear("imperialGallon", "Imperial gallon (imp gal)", 0.00454609),
    linear("cubicFoot", "Cubic foot (ft³)", 0.028316846592),
    linear("cubicInch", "Cubic inch (in³)", 1.6387064e-5),
];

static MASS: [Unit; 11] = [
    linear("gram", "Gram (g)", 1.0),
    linear("milligram", "Milligram (mg)", 1.0e-3),
    linear("microgram", "Microgram (µg)", 1.0e-6),
    linear("kilogram", "Kilogram (kg)", 1.0e3),
    linear("metricTon", "Metric ton (t)", 1.0e6),
    linear("ounce", "Ounce (oz)", 28.349523125),
    linear("pound", "Pound (lb)", 453.59237),
    linear("stone", "Stone (st)", 6350.29318),
    linear("usTon", "US ton (short ton)", 907_184.74),
    linear("imperialTon", "Imperial ton (long ton)", 1_016_046.9088),
    linear("carat", "Carat (ct)", 0.2),
];

static TEMPERATURE: [Unit; 5] = [
    scale("celsius", "Celsius (°C)"),
    scale("fahrenheit", "Fahrenheit (°F)"),
    scale("kelvin", "Kelvin (K)"),
    scale("rankine", "Rankine (°R)"),
    scale("reaumur", "Réaumur (°Ré)"),
];

static NUMBER_BASE: [Unit; 4] = [
    scale("binary", "Binary (base 2)"),
    scale("octal", "Octal (base 8)"),
    scale("decimal", "Decimal (base 10)"),
    scale("hexadecimal", "Hexadecimal (base 16)"),
];

lazy_static! {
    /// Unit id -> (kind, unit). Ids are unique across every kind.
    static ref UNIT_INDEX: HashMap<&'static str, (QuantityKind, &'static Unit)> = {
        let mut index = HashMap::new();
        for kind in QuantityKind::ALL {
            for unit in units_for(kind) {
                index.insert(unit.id, (kind, unit));
            }
        }
        index
    };
}

/// Units of `kind` in display order.
pub fn units_for(kind: QuantityKind) -> &'static [Unit] {
    match kind {
        QuantityKind::Area => &AREA,
        QuantityKind::Energy => &ENERGY,
        QuantityKind::Pressure => &PRESSURE,
        QuantityKind::Speed => &SPEED,
        QuantityKind::Volume => &VOLUME,
        QuantityKind::Mass => &MASS,
        QuantityKind::Temperature => &TEMPERATURE,
        QuantityKind::NumberBase => &NUMBER_BASE,
    }
}

pub fn find_unit(kind: QuantityKind, unit_id: &str) -> Option<&'static Unit> {
    match UNIT_INDEX.get(unit_id) {
        Some((unit_kind, unit)) if *unit_kind == kind => Some(*unit),
        _ => None,
    }
}

/// Look a unit up by id alone, returning the kind it belongs to.
pub fn lookup_unit(unit_id: &str) -> Option<(QuantityKind, &'static Unit)> {
    UNIT_INDEX.get(unit_id).copied()
}

/// Like [`find_unit`], but an unregistered id is an error.
pub fn require_unit(kind: QuantityKind, unit_id: &str) -> Result<&'static Unit> {
    find_unit(kind, unit_id).ok_or_else(|| ConvertError::UnknownUnit {
        kind,
        unit: unit_id.to_string(),
    })
}

pub fn unit_factor(kind: QuantityKind, unit_id: &str) -> Result<f64> {
    require_unit(kind, unit_id)?
        .factor
        .ok_or(ConvertError::NotLinear(kind))
}

pub fn base_unit(kind: QuantityKind) -> Option<&'static Unit> {
    units_for(kind).iter().find(|u| u.factor == Some(1.0))
}
