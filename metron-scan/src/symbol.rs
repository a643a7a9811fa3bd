//! Unit symbols and their powers

use crate::power::{try_read_power, write_superscript_power};
use std::fmt;

/// A base symbol raised to a non-zero integer power, e.g. `s⁻²`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolAndPower {
    pub symbol: String,
    pub power: i32,
}

impl SymbolAndPower {
    pub fn new(symbol: impl Into<String>, power: i32) -> Self {
        debug_assert!(power != 0, "power must be non-zero");
        Self {
            symbol: symbol.into(),
            power,
        }
    }

    /// Same symbol, power negated.
    pub fn inverse(&self) -> Self {
        Self {
            symbol: self.symbol.clone(),
            power: -self.power,
        }
    }
}

impl fmt::Display for SymbolAndPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.symbol.len() + 4);
        s.push_str(&self.symbol);
        write_superscript_power(&mut s, self.power);
        f.write_str(&s)
    }
}

/// Letters plus the degree, per-mille and percent signs.
pub fn is_symbol_char(c: char) -> bool {
    c.is_alphabetic() || c == '°' || c == '‰' || c == '%'
}

/// Read a maximal run of symbol characters.
pub fn try_read_symbol<'a>(text: &'a str, pos: &mut usize) -> Option<&'a str> {
    let start = *pos;
    let rest = text.get(start..)?;
    let len: usize = rest
        .chars()
        .take_while(|&c| is_symbol_char(c))
        .map(char::len_utf8)
        .sum();

    if len == 0 {
        return None;
    }

    *pos = start + len;
    Some(&text[start..start + len])
}

/// Read one symbol followed by its (possibly implicit) power.
pub fn try_read_symbol_and_power(text: &str, pos: &mut usize) -> Option<SymbolAndPower> {
    let start = *pos;
    let symbol = try_read_symbol(text, pos)?;
    match try_read_power(text, pos) {
        Some(power) => Some(SymbolAndPower::new(symbol, power)),
        None => {
            *pos = start;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SymbolAndPower::new("m", 1).to_string(), "m");
        assert_eq!(SymbolAndPower::new("m", 2).to_string(), "m²");
        assert_eq!(SymbolAndPower::new("s", -2).to_string(), "s⁻²");
        assert_eq!(SymbolAndPower::new("s", -1).to_string(), "s⁻¹");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(SymbolAndPower::new("kg", 1), SymbolAndPower::new(String::from("kg"), 1));
        assert_ne!(SymbolAndPower::new("kg", 1), SymbolAndPower::new("kg", -1));
        assert_eq!(SymbolAndPower::new("s", 2).inverse(), SymbolAndPower::new("s", -2));
    }

    #[test]
    fn test_read_symbol() {
        let mut pos = 0;
        assert_eq!(try_read_symbol("kg⋅m", &mut pos), Some("kg"));
        assert_eq!(pos, 2);

        let mut pos = 0;
        assert_eq!(try_read_symbol("°C", &mut pos), Some("°C"));

        let mut pos = 0;
        assert_eq!(try_read_symbol("‰ ", &mut pos), Some("‰"));

        let mut pos = 0;
        assert_eq!(try_read_symbol("µm²", &mut pos), Some("µm"));

        let mut pos = 0;
        assert_eq!(try_read_symbol("2m", &mut pos), None);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_read_symbol_and_power() {
        let mut pos = 0;
        assert_eq!(
            try_read_symbol_and_power("s⁻²", &mut pos),
            Some(SymbolAndPower::new("s", -2))
        );
        assert_eq!(pos, "s⁻²".len());

        let mut pos = 0;
        assert_eq!(try_read_symbol_and_power("m^12", &mut pos), None);
        assert_eq!(pos, 0);
    }
}
