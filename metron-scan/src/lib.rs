//! Metron Scan - Cursor-based readers
//!
//! Every reader takes the text and a `&mut usize` byte cursor. A `try_*`
//! reader either advances the cursor past what it read or returns `None`
//! with the cursor untouched; the `read_*` forms turn the `None` into a
//! `ParseError` pointing at the cursor.
//!
//! - Primitives: whitespace, sign, integer, double, operator, power
//! - Tokenizer: `kg⋅m/s²` -> `[(kg, 1), (m, 1), (s, -2)]`

mod double;
mod integer;
mod operator;
mod power;
mod sign;
mod symbol;
mod tokenizer;
mod whitespace;

pub use double::{read_f64, try_read_f64};
pub use integer::{read_i32, try_read_i32};
pub use operator::{try_read_operator, Operator};
pub use power::{is_superscript, superscript_digit, try_read_power, write_hat_power, write_superscript_power};
pub use sign::{try_read_sign, try_read_superscript_sign, Sign};
pub use symbol::{is_symbol_char, try_read_symbol, try_read_symbol_and_power, SymbolAndPower};
pub use tokenizer::{read_symbol_and_powers, try_read_symbol_and_powers, try_read_unit_expression};
pub use whitespace::{
    read_padding, shared_padding, skip_whitespace, try_read_whitespace, Padding, NO_BREAK_SPACE, SPACE,
};

/// True when nothing at `pos` (after optional whitespace) could continue a
/// unit expression: no operator, power marker or further symbol character.
pub fn is_expression_end(text: &str, pos: usize) -> bool {
    let mut p = pos;
    let had_space = try_read_whitespace(text, &mut p).is_some();
    let Some(c) = text.get(p..).and_then(|rest| rest.chars().next()) else {
        return true;
    };

    if Operator::from_char(c).is_some() {
        return false;
    }
    if had_space {
        // `m x` is a product but `m }` is not
        return true;
    }
    !(c == '^' || is_superscript(c) || is_symbol_char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_end() {
        assert!(is_expression_end("m", 1));
        assert!(is_expression_end("m ", 1));
        assert!(is_expression_end("m }", 1));
        assert!(is_expression_end("m1", 1));

        assert!(!is_expression_end("mm", 1));
        assert!(!is_expression_end("m²", 1));
        assert!(!is_expression_end("m^2", 1));
        assert!(!is_expression_end("m/s", 1));
        assert!(!is_expression_end("m / s", 1));
        assert!(!is_expression_end("m⋅s", 1));
    }
}
