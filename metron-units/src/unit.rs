//! Unit descriptors and unit handles

use crate::units::QuantityKind;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

/// Static description of one unit of a quantity kind.
///
/// `si = value * factor + offset`; the offset is only non-zero for the
/// temperature scales.
#[derive(Debug, PartialEq)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub name: &'static str,
    pub factor: f64,
    pub offset: f64,
    /// Other accepted spellings
    pub aliases: &'static [&'static str],
}

impl UnitDef {
    pub const fn new(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        UnitDef {
            symbol,
            name,
            factor,
            offset: 0.0,
            aliases: &[],
        }
    }

    pub const fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Handle to a unit of a registered quantity kind.
///
/// Two handles are equal when they point at the same descriptor; units are
/// identities, not values.
#[derive(Clone, Copy)]
pub struct Unit {
    kind: &'static QuantityKind,
    def: &'static UnitDef,
}

impl Unit {
    pub(crate) fn new(kind: &'static QuantityKind, def: &'static UnitDef) -> Self {
        Unit { kind, def }
    }

    pub fn kind(&self) -> &'static QuantityKind {
        self.kind
    }

    pub fn def(&self) -> &'static UnitDef {
        self.def
    }

    pub fn symbol(&self) -> &'static str {
        self.def.symbol
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// Symbol followed by the aliases.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.def.symbol).chain(self.def.aliases.iter().copied())
    }

    /// True for the unit the kind's values are normalised to.
    pub fn is_si(&self) -> bool {
        *self == self.kind.si_unit()
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.def.factor + self.def.offset
    }

    pub fn from_si(&self, si: f64) -> f64 {
        (si - self.def.offset) / self.def.factor
    }

    /// Convert `value` from this unit into `target`. Both must belong to
    /// the same kind; see `Quantity::convert_to` for the checked form.
    pub fn convert(&self, value: f64, target: Unit) -> f64 {
        if *self == target {
            return value;
        }
        target.from_si(self.to_si(value))
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.def, other.def)
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.def, state);
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({} {})", self.kind.name, self.def.symbol)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.def.symbol)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.def.symbol)
    }
}

#[cfg(test)]
mod tests {
    use crate::units::{DENSITY, LENGTH, TEMPERATURE};

    #[test]
    fn test_identity() {
        let m = LENGTH.unit("m").unwrap();
        let again = LENGTH.unit("metre").unwrap();
        assert_eq!(m, again);
        assert_ne!(m, LENGTH.unit("mm").unwrap());
        assert_eq!(format!("{:?}", m), "Unit(Length m)");
    }

    #[test]
    fn test_length_conversions() {
        let km = LENGTH.unit("km").unwrap();
        let m = LENGTH.unit("m").unwrap();
        let ft = LENGTH.unit("ft").unwrap();

        assert_eq!(km.convert(1.5, m), 1500.0);
        assert!((ft.convert(1.0, m) - 0.3048).abs() < 1e-12);
        assert!((m.convert(1.0, ft) - 3.280839895013123).abs() < 1e-12);
        assert!(m.is_si());
        assert!(!km.is_si());
    }

    #[test]
    fn test_only_first_unit_is_si() {
        // same factor as kg/m³, still not the SI unit
        let g_per_l = DENSITY.unit("g/L").unwrap();
        assert_eq!(g_per_l.def().factor, 1.0);
        assert!(!g_per_l.is_si());
        assert!(DENSITY.unit("kg/m³").unwrap().is_si());
    }

    #[test]
    fn test_temperature_conversions() {
        let c = TEMPERATURE.unit("°C").unwrap();
        let f = TEMPERATURE.unit("°F").unwrap();
        let k = TEMPERATURE.unit("K").unwrap();

        assert!((c.convert(0.0, k) - 273.15).abs() < 1e-9);
        assert!((c.convert(100.0, f) - 212.0).abs() < 1e-9);
        assert!((f.convert(32.0, c)).abs() < 1e-9);
        assert!((k.convert(0.0, f) + 459.67).abs() < 1e-9);
    }
}
