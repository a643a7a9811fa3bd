//! Unit and quantity parsing
//!
//! Resolving a unit spelling tries the substring cache first. The longest
//! registered spelling at the cursor is accepted when nothing after it could
//! extend the expression; otherwise the text is tokenized and looked up as a
//! symbol set, and a hit is memoized under the spelling as written.

use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::units::QuantityKind;
use metron_cache::SymbolSet;
use metron_core::{Culture, FloatStyles, MetronError, MetronResult, NumberStyles};
use metron_scan::{is_expression_end, skip_whitespace, try_read_f64, try_read_symbol_and_powers};
use tracing::{debug, trace};

/// Read a unit of `kind` at `pos`.
///
/// On success the cursor is just past the unit; trailing whitespace is left
/// alone. On failure the cursor is not moved.
pub fn try_read_unit(kind: &'static QuantityKind, text: &str, pos: &mut usize) -> Option<Unit> {
    let caches = kind.caches();
    let start = *pos;

    if let Some(found) = caches.symbols.try_get_by_prefix(text, start) {
        let end = start + found.len;
        if is_expression_end(text, end) {
            kind.stats().fast_path_hit();
            trace!(kind = kind.name, symbol = %found.key, "unit cache hit");
            *pos = end;
            return Some(found.value);
        }
    }

    kind.stats().tokenizer_run();
    let mut p = start;
    let tokens = try_read_symbol_and_powers(text, &mut p)?;
    let unit = caches.sets.try_get_value(&SymbolSet::new(tokens))?;

    let spelling = text[start..p].trim_start();
    match caches.symbols.try_add(spelling, unit) {
        Ok(()) => {
            kind.stats().memoized();
            debug!(kind = kind.name, spelling, unit = unit.symbol(), "memoized unit spelling");
        }
        Err(err) => debug!(kind = kind.name, spelling, %err, "spelling not memoized"),
    }

    *pos = p;
    Some(unit)
}

/// Whole-string unit lookup; surrounding whitespace is allowed.
pub fn try_parse_unit(kind: &'static QuantityKind, text: &str) -> Option<Unit> {
    let mut pos = 0;
    skip_whitespace(text, &mut pos);
    let unit = try_read_unit(kind, text, &mut pos)?;
    skip_whitespace(text, &mut pos);
    (pos == text.len()).then_some(unit)
}

pub fn parse_unit(kind: &'static QuantityKind, text: &str) -> MetronResult<Unit> {
    try_parse_unit(kind, text).ok_or_else(|| MetronError::unknown_unit(kind.name, text.trim()))
}

/// Parse `[ws] <number> [ws] <unit> [ws]` with the default float styles.
pub fn parse_quantity(kind: &'static QuantityKind, text: &str, culture: &Culture) -> MetronResult<Quantity> {
    parse_quantity_with_styles(kind, text, NumberStyles::FLOAT, culture)
}

pub fn try_parse_quantity(kind: &'static QuantityKind, text: &str, culture: &Culture) -> Option<Quantity> {
    parse_quantity(kind, text, culture).ok()
}

pub fn try_parse_quantity_with_styles(
    kind: &'static QuantityKind,
    text: &str,
    styles: NumberStyles,
    culture: &Culture,
) -> Option<Quantity> {
    parse_quantity_with_styles(kind, text, styles, culture).ok()
}

pub fn parse_quantity_with_styles(
    kind: &'static QuantityKind,
    text: &str,
    styles: NumberStyles,
    culture: &Culture,
) -> MetronResult<Quantity> {
    let styles = FloatStyles::new(styles)?;
    let mut pos = 0;

    skip_whitespace(text, &mut pos);
    let value = try_read_f64(text, &mut pos, styles, culture)
        .ok_or_else(|| MetronError::parse("Expected a number", text, pos))?;
    skip_whitespace(text, &mut pos);

    if pos == text.len() {
        return kind
            .symbolless_unit()
            .map(|unit| Quantity::new(value, unit))
            .ok_or_else(|| MetronError::parse("Expected a unit", text, pos));
    }

    let unit_start = pos;
    let Some(unit) = try_read_unit(kind, text, &mut pos) else {
        let mut p = unit_start;
        if try_read_symbol_and_powers(text, &mut p).is_some() {
            return Err(MetronError::unknown_unit(kind.name, text[unit_start..p].trim_end()));
        }
        return Err(MetronError::parse("Expected a unit", text, unit_start));
    };

    skip_whitespace(text, &mut pos);
    if pos != text.len() {
        return Err(MetronError::parse("Unexpected text after quantity", text, pos));
    }
    Ok(Quantity::new(value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ACCELERATION, ENERGY, FORCE_UNITS, LENGTH, PRESSURE, SPEED, UNITLESS};
    use crate::Dimension;
    use metron_core::codes;

    #[test]
    fn test_simple_quantity() {
        let q = parse_quantity(&SPEED, "1.2 m/s", &Culture::INVARIANT).unwrap();
        assert_eq!(q.value, 1.2);
        assert_eq!(q.unit.symbol(), "m/s");
    }

    #[test]
    fn test_superscript_unit() {
        let q = parse_quantity(&ACCELERATION, "1.2 m/s²", &Culture::INVARIANT).unwrap();
        assert_eq!(q.value, 1.2);
        assert_eq!(q.unit, ACCELERATION.si_unit());
    }

    #[test]
    fn test_exponent_and_no_space() {
        let q = parse_quantity(&PRESSURE, "6.789E6Pa", &Culture::INVARIANT).unwrap();
        assert_eq!(q.value, 6.789e6);
        assert_eq!(q.unit.symbol(), "Pa");

        let q = parse_quantity(&ENERGY, "1.2eV", &Culture::INVARIANT).unwrap();
        assert_eq!(q.value, 1.2);
        assert_eq!(q.unit.symbol(), "eV");
    }

    #[test]
    fn test_longest_symbol_wins() {
        let q = parse_quantity(&LENGTH, "12mm", &Culture::INVARIANT).unwrap();
        assert_eq!(q.unit.symbol(), "mm");
        assert_eq!(q.value, 12.0);

        let q = parse_quantity(&LENGTH, "12 mi", &Culture::INVARIANT).unwrap();
        assert_eq!(q.unit.symbol(), "mi");
    }

    #[test]
    fn test_culture_decimal_separator() {
        assert!(try_parse_quantity(&LENGTH, "1,2m", &Culture::EN_US).is_none());

        let q = try_parse_quantity(&LENGTH, "1,2m", &Culture::DE_DE).unwrap();
        assert_eq!(q.value, 1.2);
        assert_eq!(q.unit.symbol(), "m");

        let q = try_parse_quantity(&LENGTH, "\u{2212}3,5\u{A0}km", &Culture::SV_SE).unwrap();
        assert_eq!(q.value, -3.5);
    }

    #[test]
    fn test_thousands_need_style() {
        assert!(try_parse_quantity(&LENGTH, "1,234 m", &Culture::EN_US).is_none());
        let styles = NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS;
        let q = try_parse_quantity_with_styles(&LENGTH, "1,234 m", styles, &Culture::EN_US).unwrap();
        assert_eq!(q.value, 1234.0);
    }

    #[test]
    fn test_invalid_styles_rejected() {
        let err = parse_quantity_with_styles(&LENGTH, "1 m", NumberStyles::ALLOW_HEX_SPECIFIER, &Culture::INVARIANT)
            .unwrap_err();
        assert_eq!(err.code(), codes::INVALID_STYLE);
    }

    #[test]
    fn test_compound_resolves_structurally() {
        static FORCE: QuantityKind = QuantityKind::new("Force", Dimension::FORCE, FORCE_UNITS);

        let a = parse_quantity(&FORCE, "3 kg⋅m/s²", &Culture::INVARIANT).unwrap();
        let b = parse_quantity(&FORCE, "3 kg⋅m⋅s⁻²", &Culture::INVARIANT).unwrap();
        let c = parse_quantity(&FORCE, "3 N", &Culture::INVARIANT).unwrap();
        assert_eq!(a.unit, c.unit);
        assert_eq!(b.unit, c.unit);
    }

    #[test]
    fn test_second_parse_skips_tokenizer() {
        static FORCE: QuantityKind = QuantityKind::new("Force", Dimension::FORCE, FORCE_UNITS);

        parse_quantity(&FORCE, "1 kg*m/s^2", &Culture::INVARIANT).unwrap();
        let before = FORCE.stats().snapshot();
        assert_eq!(before.tokenizer_runs, 1);
        assert_eq!(before.memoized_spellings, 1);

        let q = parse_quantity(&FORCE, "2 kg*m/s^2", &Culture::INVARIANT).unwrap();
        let after = FORCE.stats().snapshot();
        assert_eq!(q.unit, FORCE.si_unit());
        assert_eq!(after.tokenizer_runs, 1);
        assert_eq!(after.fast_path_hits, before.fast_path_hits + 1);
    }

    #[test]
    fn test_malformed_exponents_fail() {
        for text in ["1 m^--2", "1 m⁻⁻²", "1 m^12"] {
            assert!(try_parse_quantity(&LENGTH, text, &Culture::INVARIANT).is_none(), "{text}");
        }
    }

    #[test]
    fn test_unit_reader_keeps_cursor_on_failure() {
        let mut pos = 2;
        assert_eq!(try_read_unit(&LENGTH, "1 parsec", &mut pos), None);
        assert_eq!(pos, 2);

        let mut pos = 2;
        assert_eq!(try_read_unit(&LENGTH, "1 m^--2", &mut pos), None);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_unit_reader_stops_before_trailing_text() {
        let mut pos = 0;
        let unit = try_read_unit(&LENGTH, "km }", &mut pos).unwrap();
        assert_eq!(unit.symbol(), "km");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_errors() {
        let err = parse_quantity(&LENGTH, "abc", &Culture::INVARIANT).unwrap_err();
        assert_eq!(err.code(), codes::PARSE_ERROR);
        assert!(err.to_string().contains("Expected a number"));

        let err = parse_quantity(&LENGTH, "1 kg", &Culture::INVARIANT).unwrap_err();
        assert_eq!(err, MetronError::unknown_unit("Length", "kg"));

        let err = parse_quantity(&LENGTH, "1 m !", &Culture::INVARIANT).unwrap_err();
        match err {
            MetronError::Parse(e) => assert_eq!(e.position, 4),
            other => panic!("unexpected error: {other}"),
        }

        assert!(parse_quantity(&LENGTH, "12", &Culture::INVARIANT).is_err());
    }

    #[test]
    fn test_unitless() {
        let q = parse_quantity(&UNITLESS, " 0.5 ", &Culture::INVARIANT).unwrap();
        assert_eq!(q.unit.name(), "decimal fraction");

        let q = parse_quantity(&UNITLESS, "50 %", &Culture::INVARIANT).unwrap();
        assert_eq!(q.si_value(), 0.5);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!(parse_unit(&LENGTH, " km ").unwrap().name(), "kilometer");
        assert_eq!(parse_unit(&SPEED, "m⋅s⁻¹").unwrap(), SPEED.si_unit());
        assert_eq!(
            parse_unit(&LENGTH, "furlong").unwrap_err().code(),
            codes::UNKNOWN_UNIT
        );
    }
}
