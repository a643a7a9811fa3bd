//! Dimensional analysis types
//!
//! A dimension is the vector of exponents of the seven SI base quantities,
//! always in the order mass, length, time, current, luminosity, substance,
//! temperature.

use metron_scan::SymbolAndPower;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SI base unit symbol for each position of the exponent vector
pub const BASE_SYMBOLS: [&str; 7] = ["kg", "m", "s", "A", "cd", "mol", "K"];

const BASE_NAMES: [&str; 7] = ["M", "L", "T", "I", "J", "N", "Θ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [mass, length, time, current, luminosity, substance, temperature]
    pub exponents: [i32; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
    pub const SUBSTANCE: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    /// [L T^-1]
    pub const SPEED: Dimension = Dimension::new([0, 1, -1, 0, 0, 0, 0]);
    /// [L T^-2]
    pub const ACCELERATION: Dimension = Dimension::new([0, 1, -2, 0, 0, 0, 0]);
    /// [M L T^-2]
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0]);
    /// [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::new([1, -1, -2, 0, 0, 0, 0]);
    /// [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([1, 2, -2, 0, 0, 0, 0]);
    /// [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([1, 2, -3, 0, 0, 0, 0]);
    /// [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0]);
    pub const AREA: Dimension = Dimension::new([0, 2, 0, 0, 0, 0, 0]);
    pub const VOLUME: Dimension = Dimension::new([0, 3, 0, 0, 0, 0, 0]);
    /// [M L^-3]
    pub const DENSITY: Dimension = Dimension::new([1, -3, 0, 0, 0, 0, 0]);
    /// [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([1, 2, -3, -1, 0, 0, 0]);
    /// [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([1, 2, -3, -2, 0, 0, 0]);

    pub const fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = self.exponents;
        for (r, o) in result.iter_mut().zip(other.exponents) {
            *r += o;
        }
        Dimension::new(result)
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.multiply(&other.power(-1))
    }

    /// Raise to integer power (multiply exponents)
    pub fn power(&self, exp: i32) -> Dimension {
        Dimension::new(self.exponents.map(|e| e * exp))
    }

    /// The dimension spelled in SI base units, e.g. force is `kg⋅m⋅s⁻²`.
    /// Empty for a dimensionless quantity.
    pub fn base_symbols(&self) -> Vec<SymbolAndPower> {
        self.exponents
            .iter()
            .zip(BASE_SYMBOLS)
            .filter(|(e, _)| **e != 0)
            .map(|(&e, symbol)| SymbolAndPower::new(symbol, e))
            .collect()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .exponents
            .iter()
            .zip(BASE_NAMES)
            .filter(|(e, _)| **e != 0)
            .map(|(&e, name)| if e == 1 { name.to_string() } else { format!("{}^{}", name, e) })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
