//! Number rendering
//!
//! Digits come from Rust's own float formatting (`{:e}` for the shortest
//! round-trip digits, `{:.N}` / `{:.Ne}` for rounding); this module only
//! places the point, the exponent and the culture's separators.

use crate::number_format::{CustomPattern, NumberFormat};
use metron_core::Culture;

/// Round-trip output switches to exponent form outside `1e-4 <= |x| < 1e15`.
const MAX_PLAIN_EXPONENT: i32 = 15;
const MIN_PLAIN_EXPONENT: i32 = -4;

const DEFAULT_FIXED_DECIMALS: usize = 2;
const DEFAULT_EXPONENT_DECIMALS: usize = 6;

/// Render `value` with `format` in `culture`.
pub fn format_f64(value: f64, format: &NumberFormat, culture: &Culture) -> String {
    if value.is_nan() {
        return culture.nan_symbol.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            culture.positive_infinity_symbol.to_string()
        } else {
            culture.negative_infinity_symbol.to_string()
        };
    }

    let abs = value.abs();
    let body = match format {
        NumberFormat::RoundTrip => round_trip(abs, 'E', culture),
        NumberFormat::General { precision: None | Some(0), upper } => {
            round_trip(abs, exponent_char(*upper), culture)
        }
        NumberFormat::General { precision: Some(p), upper } => general(abs, *p as usize, exponent_char(*upper), culture),
        NumberFormat::Fixed(p) => fixed(abs, decimals(*p), false, culture),
        NumberFormat::Number(p) => fixed(abs, decimals(*p), true, culture),
        NumberFormat::Exponent { precision, upper } => {
            let p = precision.map_or(DEFAULT_EXPONENT_DECIMALS, |p| p as usize);
            scientific(abs, p, exponent_char(*upper), culture)
        }
        NumberFormat::Custom(pattern) => custom(abs, pattern, culture),
    };

    if value < 0.0 {
        format!("{}{}", culture.negative_sign, body)
    } else {
        body
    }
}

fn decimals(precision: Option<u32>) -> usize {
    precision.map_or(DEFAULT_FIXED_DECIMALS, |p| p as usize)
}

fn exponent_char(upper: bool) -> char {
    if upper {
        'E'
    } else {
        'e'
    }
}

/// Split Rust's `{:e}` output (`"1.2345e-7"`) into significant digits
/// (`"12345"`) and the decimal exponent (`-7`).
fn decompose(scientific: &str) -> (String, i32) {
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn round_trip(abs: f64, e: char, culture: &Culture) -> String {
    if abs == 0.0 {
        return "0".to_string();
    }
    let (digits, exponent) = decompose(&format!("{:e}", abs));
    if exponent >= MAX_PLAIN_EXPONENT || exponent < MIN_PLAIN_EXPONENT {
        exponent_form(&digits, exponent, e, 2, culture)
    } else {
        plain_form(&digits, exponent, culture)
    }
}

fn general(abs: f64, precision: usize, e: char, culture: &Culture) -> String {
    if abs == 0.0 {
        return "0".to_string();
    }
    let (digits, exponent) = decompose(&format!("{:.*e}", precision - 1, abs));
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if exponent >= precision as i32 || exponent < MIN_PLAIN_EXPONENT {
        exponent_form(digits, exponent, e, 2, culture)
    } else {
        plain_form(digits, exponent, culture)
    }
}

/// `d.ddd` followed by the exponent, at least `min_exponent_digits` wide.
fn exponent_form(digits: &str, exponent: i32, e: char, min_exponent_digits: usize, culture: &Culture) -> String {
    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(&digits[..1]);
    if digits.len() > 1 {
        out.push_str(culture.decimal_separator);
        out.push_str(&digits[1..]);
    }
    out.push(e);
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:0width$}", exponent.unsigned_abs(), width = min_exponent_digits));
    out
}

/// Significant digits placed around the decimal point.
fn plain_form(digits: &str, exponent: i32, culture: &Culture) -> String {
    let point = exponent + 1;
    let mut out = String::with_capacity(digits.len() + 8);

    if point <= 0 {
        out.push('0');
        out.push_str(culture.decimal_separator);
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(digits);
    } else {
        let point = point as usize;
        if digits.len() <= point {
            out.push_str(digits);
            out.extend(std::iter::repeat('0').take(point - digits.len()));
        } else {
            out.push_str(&digits[..point]);
            out.push_str(culture.decimal_separator);
            out.push_str(&digits[point..]);
        }
    }
    out
}

fn fixed(abs: f64, decimals: usize, grouping: bool, culture: &Culture) -> String {
    let text = format!("{:.*}", decimals, abs);
    let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));
    join(integer, fraction, grouping, culture)
}

fn scientific(abs: f64, decimals: usize, e: char, culture: &Culture) -> String {
    let text = format!("{:.*e}", decimals, abs);
    let (mantissa, exponent) = text.split_once('e').unwrap_or((&text, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut out = join(integer, fraction, false, culture);
    out.push(e);
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:03}", exponent.unsigned_abs()));
    out
}

fn custom(abs: f64, pattern: &CustomPattern, culture: &Culture) -> String {
    let text = format!("{:.*}", pattern.max_fraction_digits, abs);
    let (integer, fraction) = text.split_once('.').unwrap_or((&text, ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > pattern.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    let integer = integer.trim_start_matches('0');
    let integer = if integer.len() < pattern.min_integer_digits {
        format!("{}{}", "0".repeat(pattern.min_integer_digits - integer.len()), integer)
    } else {
        integer.to_string()
    };

    if integer.is_empty() && fraction.is_empty() {
        return "0".to_string();
    }
    join(&integer, &fraction, pattern.grouping, culture)
}

fn join(integer: &str, fraction: &str, grouping: bool, culture: &Culture) -> String {
    let mut out = if grouping {
        group(integer, culture.group_separator)
    } else {
        integer.to_string()
    };
    if !fraction.is_empty() {
        out.push_str(culture.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Insert `separator` every three digits from the right.
fn group(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, format: &str) -> String {
        format_f64(value, &NumberFormat::parse(format).unwrap(), &Culture::INVARIANT)
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(fmt(1.2, ""), "1.2");
        assert_eq!(fmt(0.1 + 0.2, "R"), "0.30000000000000004");
        assert_eq!(fmt(-12.0, ""), "-12");
        assert_eq!(fmt(0.0, ""), "0");
        assert_eq!(fmt(6.789e6, ""), "6789000");
        assert_eq!(fmt(1e-4, ""), "0.0001");
        assert_eq!(fmt(123456789012345.0, ""), "123456789012345");
    }

    #[test]
    fn test_round_trip_exponent_form() {
        assert_eq!(fmt(1e15, ""), "1E+15");
        assert_eq!(fmt(1.5e20, ""), "1.5E+20");
        assert_eq!(fmt(1e-5, ""), "1E-05");
        assert_eq!(fmt(-2.5e-7, "R"), "-2.5E-07");
        assert_eq!(fmt(1.7976931348623157e308, ""), "1.7976931348623157E+308");
    }

    #[test]
    fn test_fixed_and_number() {
        assert_eq!(fmt(1.005, "F"), "1.00");
        assert_eq!(fmt(1.2345, "F2"), "1.23");
        assert_eq!(fmt(2.7, "F0"), "3");
        assert_eq!(fmt(1234567.891, "N2"), "1,234,567.89");
        assert_eq!(fmt(-1234.5, "N"), "-1,234.50");
        assert_eq!(fmt(999.0, "N0"), "999");
    }

    #[test]
    fn test_exponent() {
        assert_eq!(fmt(6789000.0, "E"), "6.789000E+006");
        assert_eq!(fmt(6789000.0, "e2"), "6.79e+006");
        assert_eq!(fmt(0.00012, "E1"), "1.2E-004");
        assert_eq!(fmt(0.0, "E0"), "0E+000");
    }

    #[test]
    fn test_general() {
        assert_eq!(fmt(1234.5678, "G6"), "1234.57");
        assert_eq!(fmt(1234.5678, "G2"), "1.2E+03");
        assert_eq!(fmt(1234.5678, "g2"), "1.2e+03");
        assert_eq!(fmt(0.000012345, "G3"), "1.23E-05");
        assert_eq!(fmt(0.0012345, "G3"), "0.00123");
        assert_eq!(fmt(2.0, "G5"), "2");
        assert_eq!(fmt(1.5, "G"), "1.5");
    }

    #[test]
    fn test_custom() {
        assert_eq!(fmt(1.5, "0.00"), "1.50");
        assert_eq!(fmt(1.5, "0.##"), "1.5");
        assert_eq!(fmt(0.5, "#.##"), ".5");
        assert_eq!(fmt(1234567.0, "#,##0"), "1,234,567");
        assert_eq!(fmt(7.0, "000"), "007");
        assert_eq!(fmt(0.0, "#"), "0");
        assert_eq!(fmt(-2.346, "0.0#"), "-2.35");
    }

    #[test]
    fn test_culture_separators() {
        let de = &Culture::DE_DE;
        assert_eq!(format_f64(1234.5, &NumberFormat::Number(Some(1)), de), "1.234,5");
        assert_eq!(format_f64(1.2, &NumberFormat::RoundTrip, de), "1,2");

        let sv = &Culture::SV_SE;
        assert_eq!(format_f64(-1.5, &NumberFormat::RoundTrip, sv), "\u{2212}1,5");
        assert_eq!(format_f64(1234.0, &NumberFormat::Number(Some(0)), sv), "1\u{A0}234");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::NAN, "F2"), "NaN");
        assert_eq!(fmt(f64::INFINITY, ""), "Infinity");
        assert_eq!(fmt(f64::NEG_INFINITY, ""), "-Infinity");
        assert_eq!(format_f64(f64::NEG_INFINITY, &NumberFormat::RoundTrip, &Culture::EN_US), "-∞");
    }
}
