//! Quantities: a value in a unit

use crate::unit::Unit;
use crate::units::QuantityKind;
use metron_core::{Culture, MetronError, MetronResult};
use metron_format::{format_f64, render_symbol, NumberFormat, SymbolFormat};
use metron_scan::NO_BREAK_SPACE;
use serde::Serialize;
use std::fmt;

/// Relative tolerance used by [`Quantity::approx_eq`]
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn kind(&self) -> &'static QuantityKind {
        self.unit.kind()
    }

    /// Value expressed in the kind's SI unit.
    pub fn si_value(&self) -> f64 {
        self.unit.to_si(self.value)
    }

    /// Same quantity expressed in `unit`, which must belong to the same kind.
    pub fn convert_to(&self, unit: Unit) -> MetronResult<Quantity> {
        if unit.kind() != self.kind() {
            return Err(MetronError::unknown_unit(self.kind().name, unit.symbol()));
        }
        Ok(Quantity::new(self.unit.convert(self.value, unit), unit))
    }

    /// Render with a composite format such as `"F2 mm"`, `"E3"` or `" km"`.
    /// Empty text is the default plan; text that is not a format is
    /// returned as-is.
    pub fn to_string_with(&self, format: &str, culture: &Culture) -> String {
        self.kind().quantity_format(format).render(self, culture)
    }

    /// Render in `unit` with the unit's symbol written in `style`.
    pub fn to_string_in(&self, unit: Unit, style: SymbolFormat, culture: &Culture) -> MetronResult<String> {
        let converted = self.convert_to(unit)?;
        let number = format_f64(converted.value, &NumberFormat::RoundTrip, culture);

        let symbol = match self.kind().caches().sets.try_get_set(&unit) {
            Some(set) => render_symbol(set.tokens(), style),
            None => unit.symbol().to_string(),
        };
        if symbol.is_empty() {
            return Ok(number);
        }
        Ok(format!("{number}{NO_BREAK_SPACE}{symbol}"))
    }

    /// Equal within [`RELATIVE_TOLERANCE`] once both sides are in SI.
    pub fn approx_eq(&self, other: &Quantity) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        let (a, b) = (self.si_value(), other.si_value());
        if a == b {
            return true;
        }
        (a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with("", &Culture::INVARIANT))
    }
}
