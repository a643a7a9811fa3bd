//! Order-independent symbol sets
//!
//! `kg⋅m/s²`, `m⋅kg⋅s⁻²` and `s^-2*kg*m` all spell the same set. The set
//! keeps the tokens as written (for display) and a sorted, folded key that
//! equality and hashing use.

use crate::compare::normalize;
use metron_scan::{try_read_unit_expression, SymbolAndPower};
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct SymbolSet {
    tokens: Vec<SymbolAndPower>,
    key: Vec<(String, i32)>,
}

impl SymbolSet {
    pub fn new(tokens: Vec<SymbolAndPower>) -> Self {
        let mut key: Vec<(String, i32)> = tokens
            .iter()
            .map(|t| (normalize(&t.symbol).into_owned(), t.power))
            .collect();
        key.sort();
        Self { tokens, key }
    }

    /// Tokenize a whole unit expression.
    pub fn parse(text: &str) -> Option<Self> {
        try_read_unit_expression(text).map(Self::new)
    }

    /// Tokens in the order they were written.
    pub fn tokens(&self) -> &[SymbolAndPower] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<SymbolAndPower>> for SymbolSet {
    fn from(tokens: Vec<SymbolAndPower>) -> Self {
        Self::new(tokens)
    }
}

impl PartialEq for SymbolSet {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for SymbolSet {}

impl Hash for SymbolSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("⋅")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_independent() {
        let a = SymbolSet::parse("kg⋅m/s²").unwrap();
        let b = SymbolSet::parse("m⋅kg⋅s⁻²").unwrap();
        let c = SymbolSet::parse("s^-2*kg*m").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);

        let set: HashSet<SymbolSet> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_powers_matter() {
        assert_ne!(SymbolSet::parse("m/s").unwrap(), SymbolSet::parse("m/s²").unwrap());
        assert_ne!(SymbolSet::parse("m⋅s").unwrap(), SymbolSet::parse("m/s").unwrap());
    }

    #[test]
    fn test_micro_sign_folds() {
        assert_eq!(SymbolSet::parse("\u{B5}m").unwrap(), SymbolSet::parse("\u{3BC}m").unwrap());
    }

    #[test]
    fn test_keeps_written_order() {
        let set = SymbolSet::parse("m/s⋅kg").unwrap();
        let symbols: Vec<&str> = set.tokens().iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, ["m", "s", "kg"]);
        assert_eq!(set.to_string(), "m⋅s⁻¹⋅kg⁻¹");
    }
}
