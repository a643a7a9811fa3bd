//! Unit expression tokenizer
//!
//! Turns `kg⋅m/s²` into `[(kg, 1), (m, 1), (s, -2)]`. A `/` makes every
//! following token negative, so only one is allowed per expression.

use crate::operator::{try_read_operator, Operator};
use crate::sign::Sign;
use crate::symbol::{try_read_symbol_and_power, SymbolAndPower};
use crate::whitespace::skip_whitespace;
use metron_core::{MetronError, MetronResult};

/// Read a unit expression starting at `pos`.
///
/// On success the cursor sits just past the last token; whitespace after it
/// is left for the caller. Fails, cursor untouched, on a repeated base
/// symbol, a second `/`, a dangling operator or a malformed power.
pub fn try_read_symbol_and_powers(text: &str, pos: &mut usize) -> Option<Vec<SymbolAndPower>> {
    let mut p = *pos;
    let mut sign = Sign::Positive;
    let mut tokens: Vec<SymbolAndPower> = Vec::new();

    skip_whitespace(text, &mut p);
    loop {
        let token = try_read_symbol_and_power(text, &mut p)?;
        if tokens.iter().any(|t| t.symbol == token.symbol) {
            return None;
        }
        tokens.push(SymbolAndPower::new(token.symbol, sign.apply(token.power)));

        let end = p;
        skip_whitespace(text, &mut p);
        match try_read_operator(text, &mut p) {
            Some(Operator::Multiply) => {}
            Some(Operator::Divide) => {
                if sign == Sign::Negative {
                    return None;
                }
                sign = Sign::Negative;
            }
            None => {
                p = end;
                break;
            }
        }
        skip_whitespace(text, &mut p);
    }

    *pos = p;
    Some(tokens)
}

/// Whole-string form: surrounding whitespace is allowed, anything else left
/// over is a failure.
pub fn try_read_unit_expression(text: &str) -> Option<Vec<SymbolAndPower>> {
    let mut pos = 0;
    let tokens = try_read_symbol_and_powers(text, &mut pos)?;
    skip_whitespace(text, &mut pos);
    (pos == text.len()).then_some(tokens)
}

/// Throwing form of [`try_read_symbol_and_powers`].
pub fn read_symbol_and_powers(text: &str, pos: &mut usize) -> MetronResult<Vec<SymbolAndPower>> {
    try_read_symbol_and_powers(text, pos)
        .ok_or_else(|| MetronError::parse("Expected a unit expression", text, *pos))
}
