//! Quantity kinds and their unit tables
//!
//! Every kind owns a closed table of units. The first entry of each table is
//! the SI unit the kind normalises to.

use crate::context::{CacheStats, UnitCaches, UnitContext};
use crate::quantity_format::QuantityFormat;
use crate::unit::{Unit, UnitDef};
use crate::Dimension;
use metron_format::{parse_padded_number_format, PaddedFormat};
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A physical quantity dimension and the units it can be written in.
pub struct QuantityKind {
    pub name: &'static str,
    pub dimension: Dimension,
    units: &'static [UnitDef],
    context: UnitContext,
}

impl QuantityKind {
    pub const fn new(name: &'static str, dimension: Dimension, units: &'static [UnitDef]) -> Self {
        QuantityKind {
            name,
            dimension,
            units,
            context: UnitContext::new(),
        }
    }

    /// Case-insensitive lookup among the registered kinds.
    pub fn by_name(name: &str) -> Option<&'static QuantityKind> {
        QUANTITY_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name.eq_ignore_ascii_case(name))
    }

    pub fn units(&'static self) -> impl Iterator<Item = Unit> {
        self.units.iter().map(move |def| Unit::new(self, def))
    }

    pub fn si_unit(&'static self) -> Unit {
        Unit::new(self, &self.units[0])
    }

    /// Unit registered under exactly this symbol or alias.
    pub fn unit(&'static self, symbol: &str) -> Option<Unit> {
        self.caches().symbols.try_get(symbol)
    }

    /// The unit written without a symbol, if the kind has one.
    pub fn symbolless_unit(&'static self) -> Option<Unit> {
        self.units().find(|unit| unit.symbol().is_empty())
    }

    /// Lookup caches, built on first use.
    pub fn caches(&'static self) -> &'static UnitCaches {
        self.context.caches(self)
    }

    pub fn stats(&self) -> &CacheStats {
        self.context.stats()
    }

    pub fn is_initialised(&self) -> bool {
        self.context.is_initialised()
    }

    /// Padded numeric format for `text`, parsed once per distinct string.
    pub fn number_format(&'static self, text: &str) -> Arc<PaddedFormat> {
        let caches = self.caches();
        if let Some(format) = caches.number_formats.try_get(text) {
            self.stats().format_hit();
            return format;
        }
        self.stats().format_miss();
        debug!(kind = self.name, format = text, "number format cache miss");
        caches
            .number_formats
            .get_or_insert_with(text, || Arc::new(parse_padded_number_format(text)))
    }

    /// Composite quantity format for `text`, parsed once per distinct string.
    pub fn quantity_format(&'static self, text: &str) -> Arc<QuantityFormat> {
        let caches = self.caches();
        if let Some(format) = caches.quantity_formats.try_get(text) {
            self.stats().format_hit();
            return format;
        }
        self.stats().format_miss();
        debug!(kind = self.name, format = text, "quantity format cache miss");
        caches
            .quantity_formats
            .get_or_insert_with(text, || Arc::new(QuantityFormat::parse(self, text)))
    }
}

impl fmt::Debug for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityKind")
            .field("name", &self.name)
            .field("dimension", &self.dimension)
            .field("units", &self.units.len())
            .finish()
    }
}

impl PartialEq for QuantityKind {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Every registered kind
pub static QUANTITY_KINDS: [&QuantityKind; 19] = [
    &LENGTH,
    &MASS,
    &TIME,
    &SPEED,
    &ACCELERATION,
    &FORCE,
    &PRESSURE,
    &ENERGY,
    &POWER,
    &FREQUENCY,
    &AREA,
    &VOLUME,
    &DENSITY,
    &TEMPERATURE,
    &CURRENT,
    &VOLTAGE,
    &RESISTANCE,
    &ANGLE,
    &UNITLESS,
];

pub static LENGTH: QuantityKind = QuantityKind::new("Length", Dimension::LENGTH, LENGTH_UNITS);
pub static MASS: QuantityKind = QuantityKind::new("Mass", Dimension::MASS, MASS_UNITS);
pub static TIME: QuantityKind = QuantityKind::new("Time", Dimension::TIME, TIME_UNITS);
pub static SPEED: QuantityKind = QuantityKind::new("Speed", Dimension::SPEED, SPEED_UNITS);
pub static ACCELERATION: QuantityKind =
    QuantityKind::new("Acceleration", Dimension::ACCELERATION, ACCELERATION_UNITS);
pub static FORCE: QuantityKind = QuantityKind::new("Force", Dimension::FORCE, FORCE_UNITS);
pub static PRESSURE: QuantityKind = QuantityKind::new("Pressure", Dimension::PRESSURE, PRESSURE_UNITS);
pub static ENERGY: QuantityKind = QuantityKind::new("Energy", Dimension::ENERGY, ENERGY_UNITS);
pub static POWER: QuantityKind = QuantityKind::new("Power", Dimension::POWER, POWER_UNITS);
pub static FREQUENCY: QuantityKind = QuantityKind::new("Frequency", Dimension::FREQUENCY, FREQUENCY_UNITS);
pub static AREA: QuantityKind = QuantityKind::new("Area", Dimension::AREA, AREA_UNITS);
pub static VOLUME: QuantityKind = QuantityKind::new("Volume", Dimension::VOLUME, VOLUME_UNITS);
pub static DENSITY: QuantityKind = QuantityKind::new("Density", Dimension::DENSITY, DENSITY_UNITS);
pub static TEMPERATURE: QuantityKind =
    QuantityKind::new("Temperature", Dimension::TEMPERATURE, TEMPERATURE_UNITS);
pub static CURRENT: QuantityKind = QuantityKind::new("Current", Dimension::CURRENT, CURRENT_UNITS);
pub static VOLTAGE: QuantityKind = QuantityKind::new("Voltage", Dimension::VOLTAGE, VOLTAGE_UNITS);
pub static RESISTANCE: QuantityKind = QuantityKind::new("Resistance", Dimension::RESISTANCE, RESISTANCE_UNITS);
pub static ANGLE: QuantityKind = QuantityKind::new("Angle", Dimension::DIMENSIONLESS, ANGLE_UNITS);
pub static UNITLESS: QuantityKind = QuantityKind::new("Unitless", Dimension::DIMENSIONLESS, UNITLESS_UNITS);

pub(crate) const LENGTH_UNITS: &[UnitDef] = &[
    UnitDef::new("m", "meter", 1.0).aliases(&["meter", "meters", "metre", "metres"]),
    UnitDef::new("km", "kilometer", 1e3).aliases(&["kilometer", "kilometers", "kilometre"]),
    UnitDef::new("dm", "decimeter", 1e-1),
    UnitDef::new("cm", "centimeter", 1e-2).aliases(&["centimeter", "centimeters"]),
    UnitDef::new("mm", "millimeter", 1e-3).aliases(&["millimeter", "millimeters"]),
    UnitDef::new("µm", "micrometer", 1e-6).aliases(&["um", "micron"]),
    UnitDef::new("nm", "nanometer", 1e-9),
    UnitDef::new("in", "inch", 0.0254).aliases(&["inch", "inches"]),
    UnitDef::new("ft", "foot", 0.3048).aliases(&["foot", "feet"]),
    UnitDef::new("yd", "yard", 0.9144).aliases(&["yard", "yards"]),
    UnitDef::new("mi", "mile", 1609.344).aliases(&["mile", "miles"]),
    UnitDef::new("nmi", "nautical mile", 1852.0).aliases(&["NM"]),
    UnitDef::new("au", "astronomical unit", 149_597_870_700.0),
    UnitDef::new("ly", "light year", 9_460_730_472_580_800.0),
];

pub(crate) const MASS_UNITS: &[UnitDef] = &[
    UnitDef::new("kg", "kilogram", 1.0).aliases(&["kilogram", "kilograms"]),
    UnitDef::new("g", "gram", 1e-3).aliases(&["gram", "grams"]),
    UnitDef::new("mg", "milligram", 1e-6),
    UnitDef::new("µg", "microgram", 1e-9).aliases(&["ug"]),
    UnitDef::new("t", "tonne", 1e3).aliases(&["tonne", "tonnes"]),
    UnitDef::new("lb", "pound", 0.45359237).aliases(&["lbs", "pound", "pounds"]),
    UnitDef::new("oz", "ounce", 0.028349523125).aliases(&["ounce", "ounces"]),
    UnitDef::new("st", "stone", 6.35029318),
];

pub(crate) const TIME_UNITS: &[UnitDef] = &[
    UnitDef::new("s", "second", 1.0).aliases(&["sec", "second", "seconds"]),
    UnitDef::new("ms", "millisecond", 1e-3),
    UnitDef::new("µs", "microsecond", 1e-6).aliases(&["us"]),
    UnitDef::new("ns", "nanosecond", 1e-9),
    UnitDef::new("min", "minute", 60.0).aliases(&["minute", "minutes"]),
    UnitDef::new("h", "hour", 3600.0).aliases(&["hr", "hour", "hours"]),
    UnitDef::new("d", "day", 86400.0).aliases(&["day", "days"]),
    UnitDef::new("wk", "week", 604800.0).aliases(&["week", "weeks"]),
];

pub(crate) const SPEED_UNITS: &[UnitDef] = &[
    UnitDef::new("m/s", "meter per second", 1.0).aliases(&["m⋅s⁻¹", "m*s^-1"]),
    UnitDef::new("km/h", "kilometer per hour", 1.0 / 3.6).aliases(&["kph"]),
    UnitDef::new("mph", "mile per hour", 0.44704),
    UnitDef::new("kn", "knot", 1852.0 / 3600.0).aliases(&["kt", "knot", "knots"]),
    UnitDef::new("ft/s", "foot per second", 0.3048).aliases(&["fps"]),
];

pub(crate) const ACCELERATION_UNITS: &[UnitDef] = &[
    UnitDef::new("m/s²", "meter per second squared", 1.0),
    UnitDef::new("ft/s²", "foot per second squared", 0.3048),
    UnitDef::new("gn", "standard gravity", 9.80665),
    UnitDef::new("Gal", "gal", 0.01),
];

pub(crate) const FORCE_UNITS: &[UnitDef] = &[
    UnitDef::new("N", "newton", 1.0).aliases(&["newton", "newtons"]),
    UnitDef::new("kN", "kilonewton", 1e3),
    UnitDef::new("mN", "millinewton", 1e-3),
    UnitDef::new("lbf", "pound-force", 4.4482216152605),
    UnitDef::new("kgf", "kilogram-force", 9.80665),
    UnitDef::new("dyn", "dyne", 1e-5),
];

pub(crate) const PRESSURE_UNITS: &[UnitDef] = &[
    UnitDef::new("Pa", "pascal", 1.0).aliases(&["N/m²"]),
    UnitDef::new("hPa", "hectopascal", 1e2),
    UnitDef::new("kPa", "kilopascal", 1e3),
    UnitDef::new("MPa", "megapascal", 1e6),
    UnitDef::new("bar", "bar", 1e5),
    UnitDef::new("mbar", "millibar", 1e2),
    UnitDef::new("atm", "atmosphere", 101_325.0),
    UnitDef::new("psi", "pound per square inch", 6894.757293168361),
    UnitDef::new("mmHg", "millimeter of mercury", 133.322387415),
    UnitDef::new("Torr", "torr", 101_325.0 / 760.0),
];

pub(crate) const ENERGY_UNITS: &[UnitDef] = &[
    UnitDef::new("J", "joule", 1.0).aliases(&["joule", "joules", "N⋅m"]),
    UnitDef::new("kJ", "kilojoule", 1e3),
    UnitDef::new("MJ", "megajoule", 1e6),
    UnitDef::new("cal", "calorie", 4.184),
    UnitDef::new("kcal", "kilocalorie", 4184.0),
    UnitDef::new("Wh", "watt hour", 3600.0).aliases(&["W⋅h"]),
    UnitDef::new("kWh", "kilowatt hour", 3.6e6).aliases(&["kW⋅h"]),
    UnitDef::new("eV", "electronvolt", 1.602176634e-19),
    UnitDef::new("BTU", "british thermal unit", 1055.05585262),
];

pub(crate) const POWER_UNITS: &[UnitDef] = &[
    UnitDef::new("W", "watt", 1.0).aliases(&["watt", "watts", "J/s"]),
    UnitDef::new("mW", "milliwatt", 1e-3),
    UnitDef::new("kW", "kilowatt", 1e3),
    UnitDef::new("MW", "megawatt", 1e6),
    UnitDef::new("GW", "gigawatt", 1e9),
    UnitDef::new("hp", "horsepower", 745.69987158227022),
];

pub(crate) const FREQUENCY_UNITS: &[UnitDef] = &[
    UnitDef::new("Hz", "hertz", 1.0).aliases(&["hertz"]),
    UnitDef::new("kHz", "kilohertz", 1e3),
    UnitDef::new("MHz", "megahertz", 1e6),
    UnitDef::new("GHz", "gigahertz", 1e9),
    UnitDef::new("rpm", "revolution per minute", 1.0 / 60.0),
];

pub(crate) const AREA_UNITS: &[UnitDef] = &[
    UnitDef::new("m²", "square meter", 1.0).aliases(&["m^2", "sqm"]),
    UnitDef::new("km²", "square kilometer", 1e6),
    UnitDef::new("cm²", "square centimeter", 1e-4),
    UnitDef::new("mm²", "square millimeter", 1e-6),
    UnitDef::new("ha", "hectare", 1e4).aliases(&["hectare", "hectares"]),
    UnitDef::new("ft²", "square foot", 0.09290304).aliases(&["sqft"]),
    UnitDef::new("in²", "square inch", 0.00064516),
    UnitDef::new("ac", "acre", 4046.8564224).aliases(&["acre", "acres"]),
];

pub(crate) const VOLUME_UNITS: &[UnitDef] = &[
    UnitDef::new("m³", "cubic meter", 1.0).aliases(&["m^3"]),
    UnitDef::new("L", "liter", 1e-3).aliases(&["l", "liter", "liters", "litre", "litres"]),
    UnitDef::new("mL", "milliliter", 1e-6).aliases(&["ml"]),
    UnitDef::new("cm³", "cubic centimeter", 1e-6).aliases(&["cc"]),
    UnitDef::new("gal", "US gallon", 0.003785411784).aliases(&["gallon", "gallons"]),
    UnitDef::new("ft³", "cubic foot", 0.028316846592),
];

pub(crate) const DENSITY_UNITS: &[UnitDef] = &[
    UnitDef::new("kg/m³", "kilogram per cubic meter", 1.0),
    UnitDef::new("g/cm³", "gram per cubic centimeter", 1e3),
    UnitDef::new("g/L", "gram per liter", 1.0),
    UnitDef::new("lb/ft³", "pound per cubic foot", 16.018463373960138),
];

pub(crate) const TEMPERATURE_UNITS: &[UnitDef] = &[
    UnitDef::new("K", "kelvin", 1.0).aliases(&["kelvin"]),
    UnitDef::new("°C", "degree Celsius", 1.0).offset(273.15).aliases(&["degC", "celsius"]),
    UnitDef::new("°F", "degree Fahrenheit", 5.0 / 9.0)
        .offset(459.67 * 5.0 / 9.0)
        .aliases(&["degF", "fahrenheit"]),
    UnitDef::new("°R", "degree Rankine", 5.0 / 9.0).aliases(&["degR", "rankine"]),
];

pub(crate) const CURRENT_UNITS: &[UnitDef] = &[
    UnitDef::new("A", "ampere", 1.0).aliases(&["amp", "amps", "ampere"]),
    UnitDef::new("kA", "kiloampere", 1e3),
    UnitDef::new("mA", "milliampere", 1e-3),
    UnitDef::new("µA", "microampere", 1e-6).aliases(&["uA"]),
];

pub(crate) const VOLTAGE_UNITS: &[UnitDef] = &[
    UnitDef::new("V", "volt", 1.0).aliases(&["volt", "volts", "W/A"]),
    UnitDef::new("kV", "kilovolt", 1e3),
    UnitDef::new("MV", "megavolt", 1e6),
    UnitDef::new("mV", "millivolt", 1e-3),
    UnitDef::new("µV", "microvolt", 1e-6).aliases(&["uV"]),
];

pub(crate) const RESISTANCE_UNITS: &[UnitDef] = &[
    UnitDef::new("Ω", "ohm", 1.0).aliases(&["ohm", "ohms", "V/A"]),
    UnitDef::new("kΩ", "kiloohm", 1e3).aliases(&["kohm"]),
    UnitDef::new("MΩ", "megaohm", 1e6).aliases(&["Mohm"]),
    UnitDef::new("mΩ", "milliohm", 1e-3).aliases(&["mohm"]),
];

pub(crate) const ANGLE_UNITS: &[UnitDef] = &[
    UnitDef::new("rad", "radian", 1.0).aliases(&["radian", "radians"]),
    UnitDef::new("mrad", "milliradian", 1e-3),
    UnitDef::new("°", "degree", PI / 180.0).aliases(&["deg", "degree", "degrees"]),
    UnitDef::new("grad", "gradian", PI / 200.0).aliases(&["gon"]),
    UnitDef::new("rev", "revolution", 2.0 * PI).aliases(&["turn", "turns"]),
];

pub(crate) const UNITLESS_UNITS: &[UnitDef] = &[
    UnitDef::new("", "decimal fraction", 1.0),
    UnitDef::new("%", "percent", 1e-2).aliases(&["percent"]),
    UnitDef::new("‰", "per mille", 1e-3).aliases(&["permille"]),
    UnitDef::new("ppm", "parts per million", 1e-6),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        assert_eq!(QUANTITY_KINDS.len(), 19);
        assert_eq!(QuantityKind::by_name("length"), Some(&LENGTH));
        assert_eq!(QuantityKind::by_name("FORCE"), Some(&FORCE));
        assert_eq!(QuantityKind::by_name("Luminance"), None);
    }

    #[test]
    fn test_first_unit_is_si() {
        for kind in QUANTITY_KINDS {
            let si = kind.si_unit();
            assert!(si.is_si(), "{}", kind.name);
            assert_eq!((si.def().factor, si.def().offset), (1.0, 0.0), "{}", kind.name);
            assert_eq!(kind.units().filter(|unit| unit.is_si()).count(), 1, "{}", kind.name);
        }
    }

    #[test]
    fn test_every_spelling_resolves_to_its_unit() {
        for kind in QUANTITY_KINDS {
            for unit in kind.units() {
                for spelling in unit.spellings().filter(|s| !s.is_empty()) {
                    assert_eq!(kind.unit(spelling), Some(unit), "{} {}", kind.name, spelling);
                }
            }
        }
    }

    #[test]
    fn test_unit_lookup() {
        assert_eq!(LENGTH.unit("metres").map(|u| u.symbol()), Some("m"));
        assert_eq!(RESISTANCE.unit("\u{2126}").map(|u| u.name()), Some("ohm"));
        assert_eq!(LENGTH.unit("μm").map(|u| u.name()), Some("micrometer"));
        assert_eq!(LENGTH.unit("kg"), None);
        assert_eq!(UNITLESS.symbolless_unit().map(|u| u.name()), Some("decimal fraction"));
        assert_eq!(LENGTH.symbolless_unit(), None);
    }

    #[test]
    fn test_number_format_cached() {
        let first = ANGLE.number_format(" F2 ");
        let second = ANGLE.number_format(" F2 ");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.format, "F2");
    }
}
