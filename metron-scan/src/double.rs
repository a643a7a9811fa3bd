//! Floating point reader
//!
//! Two passes: `locate` walks the culture-specific literal without allocating
//! and only then is the exact span handed to `f64::from_str`. The span is
//! borrowed as-is when it is already in Rust syntax, which is the common case
//! for the invariant culture.

use crate::sign::Sign;
use metron_core::{Culture, FloatStyles, MetronError, MetronResult, NumberStyles};

/// Read a floating point literal at `pos`.
///
/// On failure the cursor is left where it was. An exponent marker that is not
/// followed by digits is not part of the literal, so `"1.2eV"` reads `1.2` and
/// leaves the cursor on the `e`.
pub fn try_read_f64(text: &str, pos: &mut usize, styles: FloatStyles, culture: &Culture) -> Option<f64> {
    let start = *pos;
    let rest = text.get(start..)?;

    if let Some(literal) = locate(rest, styles, culture) {
        let span = &rest[..literal.len];
        let value = if literal.plain {
            span.parse::<f64>().ok()
        } else {
            normalize(span, culture).parse::<f64>().ok()
        };

        if let Some(value) = value {
            *pos = start + literal.len;
            return Some(value);
        }
    }

    let (len, value) = read_special(rest, styles, culture)?;
    *pos = start + len;
    Some(value)
}

/// Throwing form of [`try_read_f64`].
pub fn read_f64(text: &str, pos: &mut usize, styles: FloatStyles, culture: &Culture) -> MetronResult<f64> {
    try_read_f64(text, pos, styles, culture)
        .ok_or_else(|| MetronError::parse("Expected a number", text, *pos))
}

struct Literal {
    len: usize,
    /// Span parses with `f64::from_str` without rewriting.
    plain: bool,
}

fn locate(s: &str, styles: FloatStyles, culture: &Culture) -> Option<Literal> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut plain = true;

    if styles.allows(NumberStyles::ALLOW_LEADING_SIGN) {
        if let Some((len, _, ascii)) = leading_sign(s, culture) {
            i += len;
            plain &= ascii;
        }
    }

    let int_start = i;
    let mut int_digits = 0;
    loop {
        if i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            int_digits += 1;
            continue;
        }

        let group = culture.group_separator;
        if styles.allows(NumberStyles::ALLOW_THOUSANDS)
            && i > int_start
            && !group.is_empty()
            && s[i..].starts_with(group)
            && digit_at(bytes, i + group.len())
        {
            i += group.len();
            plain = false;
            continue;
        }

        break;
    }

    let mut frac_digits = 0;
    let decimal = culture.decimal_separator;
    if styles.allows(NumberStyles::ALLOW_DECIMAL_POINT) && !decimal.is_empty() && s[i..].starts_with(decimal) {
        let mut j = i + decimal.len();
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            frac_digits += 1;
        }

        if int_digits > 0 || frac_digits > 0 {
            i = j;
            plain &= decimal == ".";
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if styles.allows(NumberStyles::ALLOW_EXPONENT) && matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        let mut exponent_plain = true;
        if let Some((len, _, ascii)) = leading_sign(&s[j..], culture) {
            j += len;
            exponent_plain = ascii;
        }

        if digit_at(bytes, j) {
            while digit_at(bytes, j) {
                j += 1;
            }
            i = j;
            plain &= exponent_plain;
        }
    }

    Some(Literal { len: i, plain })
}

fn digit_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i).map_or(false, u8::is_ascii_digit)
}

/// Culture sign at the start of `s`: `(byte length, sign, is plain ASCII)`.
/// A hyphen-minus is always accepted as negative, also for cultures whose
/// negative sign is U+2212.
fn leading_sign(s: &str, culture: &Culture) -> Option<(usize, Sign, bool)> {
    let negative = culture.negative_sign;
    let positive = culture.positive_sign;

    if !negative.is_empty() && s.starts_with(negative) {
        return Some((negative.len(), Sign::Negative, negative == "-"));
    }
    if !positive.is_empty() && s.starts_with(positive) {
        return Some((positive.len(), Sign::Positive, positive == "+"));
    }
    match s.as_bytes().first() {
        Some(b'-') => Some((1, Sign::Negative, true)),
        Some(b'+') => Some((1, Sign::Positive, true)),
        _ => None,
    }
}

/// Rewrite a located span into Rust float syntax.
fn normalize(span: &str, culture: &Culture) -> String {
    let mut out = String::with_capacity(span.len());
    let mut rest = span;

    while let Some(c) = rest.chars().next() {
        let taken = if !culture.decimal_separator.is_empty() && rest.starts_with(culture.decimal_separator) {
            out.push('.');
            culture.decimal_separator.len()
        } else if !culture.group_separator.is_empty() && rest.starts_with(culture.group_separator) {
            culture.group_separator.len()
        } else if !culture.negative_sign.is_empty() && rest.starts_with(culture.negative_sign) {
            out.push('-');
            culture.negative_sign.len()
        } else if !culture.positive_sign.is_empty() && rest.starts_with(culture.positive_sign) {
            out.push('+');
            culture.positive_sign.len()
        } else {
            out.push(c);
            c.len_utf8()
        };
        rest = &rest[taken..];
    }

    out
}

/// NaN and the infinities, matched ignoring ASCII case.
fn read_special(s: &str, styles: FloatStyles, culture: &Culture) -> Option<(usize, f64)> {
    if styles.allows(NumberStyles::ALLOW_LEADING_SIGN) {
        if let Some(len) = starts_with_symbol(s, culture.negative_infinity_symbol) {
            return Some((len, f64::NEG_INFINITY));
        }

        if let Some((sign_len, sign, _)) = leading_sign(s, culture) {
            if let Some(len) = starts_with_symbol(&s[sign_len..], culture.positive_infinity_symbol) {
                let value = match sign {
                    Sign::Positive => f64::INFINITY,
                    Sign::Negative => f64::NEG_INFINITY,
                };
                return Some((sign_len + len, value));
            }
        }
    }

    if let Some(len) = starts_with_symbol(s, culture.positive_infinity_symbol) {
        return Some((len, f64::INFINITY));
    }

    starts_with_symbol(s, culture.nan_symbol).map(|len| (len, f64::NAN))
}

fn starts_with_symbol(s: &str, symbol: &str) -> Option<usize> {
    if symbol.is_empty() {
        return None;
    }
    let prefix = s.get(..symbol.len())?;
    prefix.eq_ignore_ascii_case(symbol).then_some(symbol.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, culture: &Culture) -> (Option<f64>, usize) {
        let mut pos = 0;
        let result = try_read_f64(text, &mut pos, FloatStyles::FLOAT, culture);
        (result, pos)
    }

    fn read_inv(text: &str) -> (Option<f64>, usize) {
        read(text, &Culture::INVARIANT)
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(read_inv("1.2 m"), (Some(1.2), 3));
        assert_eq!(read_inv("-12"), (Some(-12.0), 3));
        assert_eq!(read_inv("+0.5"), (Some(0.5), 4));
        assert_eq!(read_inv(".5"), (Some(0.5), 2));
        assert_eq!(read_inv("1."), (Some(1.0), 2));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(read_inv("6.789E6Pa"), (Some(6.789e6), 7));
        assert_eq!(read_inv("1e-3m"), (Some(1e-3), 4));
        assert_eq!(read_inv("1E+3"), (Some(1e3), 4));
    }

    #[test]
    fn test_exponent_marker_without_digits_backs_off() {
        assert_eq!(read_inv("1.2eV"), (Some(1.2), 3));
        assert_eq!(read_inv("1.2e-V"), (Some(1.2), 3));
        assert_eq!(read_inv("1e+"), (Some(1.0), 1));
        assert_eq!(read_inv("2E"), (Some(2.0), 1));
    }

    #[test]
    fn test_no_digits_fails() {
        assert_eq!(read_inv(""), (None, 0));
        assert_eq!(read_inv("m"), (None, 0));
        assert_eq!(read_inv("-"), (None, 0));
        assert_eq!(read_inv("."), (None, 0));
        assert_eq!(read_inv("-.e5"), (None, 0));
    }

    #[test]
    fn test_comma_decimal_culture() {
        assert_eq!(read("1,2m", &Culture::DE_DE), (Some(1.2), 3));
        // comma is not a decimal separator in en-US
        assert_eq!(read("1,2m", &Culture::EN_US), (Some(1.0), 1));
    }

    #[test]
    fn test_unicode_minus() {
        let text = "\u{2212}1,5";
        let (value, pos) = read(text, &Culture::SV_SE);
        assert_eq!(value, Some(-1.5));
        assert_eq!(pos, text.len());

        assert_eq!(read("-1,5", &Culture::SV_SE), (Some(-1.5), 4));
    }

    #[test]
    fn test_thousands() {
        let styles = FloatStyles::new(NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS).unwrap();

        let mut pos = 0;
        assert_eq!(try_read_f64("1,234.5 m", &mut pos, styles, &Culture::EN_US), Some(1234.5));
        assert_eq!(pos, 7);

        let mut pos = 0;
        assert_eq!(try_read_f64("1.234,5", &mut pos, styles, &Culture::DE_DE), Some(1234.5));
        assert_eq!(pos, 7);

        // a separator must be followed by a digit
        let mut pos = 0;
        assert_eq!(try_read_f64("12, m", &mut pos, styles, &Culture::EN_US), Some(12.0));
        assert_eq!(pos, 2);

        // and preceded by one
        let mut pos = 0;
        assert_eq!(try_read_f64(",12", &mut pos, styles, &Culture::EN_US), None);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_styles_are_honoured() {
        let styles = FloatStyles::new(NumberStyles::ALLOW_DECIMAL_POINT).unwrap();
        let mut pos = 0;
        assert_eq!(try_read_f64("-1.5", &mut pos, styles, &Culture::INVARIANT), None);
        assert_eq!(pos, 0);

        let mut pos = 0;
        assert_eq!(try_read_f64("1.5e3", &mut pos, styles, &Culture::INVARIANT), Some(1.5));
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_special_values() {
        let (value, pos) = read_inv("NaN m");
        assert!(value.unwrap().is_nan());
        assert_eq!(pos, 3);

        assert_eq!(read_inv("Infinity"), (Some(f64::INFINITY), 8));
        assert_eq!(read_inv("-Infinity m"), (Some(f64::NEG_INFINITY), 9));
        assert_eq!(read_inv("+infinity"), (Some(f64::INFINITY), 9));

        let (value, pos) = read("-∞ m", &Culture::EN_US);
        assert_eq!(value, Some(f64::NEG_INFINITY));
        assert_eq!(pos, "-∞".len());
    }

    #[test]
    fn test_offset_cursor_and_rollback() {
        let mut pos = 3;
        assert_eq!(try_read_f64("abc12.5", &mut pos, FloatStyles::FLOAT, &Culture::INVARIANT), Some(12.5));
        assert_eq!(pos, 7);

        let mut pos = 1;
        assert_eq!(try_read_f64("a b", &mut pos, FloatStyles::FLOAT, &Culture::INVARIANT), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_read_f64_error() {
        let mut pos = 0;
        let err = read_f64("m", &mut pos, FloatStyles::FLOAT, &Culture::INVARIANT).unwrap_err();
        assert!(err.to_string().contains("Expected a number"));
    }
}
