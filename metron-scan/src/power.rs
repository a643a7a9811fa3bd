//! Exponent reader and superscript helpers
//!
//! Three notations compete for the power of a symbol:
//! `m^2` / `s^-1` (hat + one ASCII digit), `m²` / `s⁻¹` (superscripts) and
//! plain `m` (implicit power of one).

use crate::sign::{try_read_sign, try_read_superscript_sign, Sign};

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

pub fn superscript_digit(c: char) -> Option<u32> {
    SUPERSCRIPT_DIGITS
        .iter()
        .position(|&d| d == c)
        .map(|i| i as u32)
}

pub fn is_superscript(c: char) -> bool {
    c == '⁺' || c == '⁻' || superscript_digit(c).is_some()
}

/// Append `power` in superscript: nothing for 1, `²` for 2, `⁻¹` for -1.
pub fn write_superscript_power(out: &mut String, power: i32) {
    if power == 1 {
        return;
    }
    if power < 0 {
        out.push('⁻');
    }
    for d in power.unsigned_abs().to_string().bytes() {
        out.push(SUPERSCRIPT_DIGITS[usize::from(d - b'0')]);
    }
}

/// Append `power` in hat notation: nothing for 1, `^2`, `^-1`.
pub fn write_hat_power(out: &mut String, power: i32) {
    if power != 1 {
        out.push('^');
        out.push_str(&power.to_string());
    }
}

/// Read the power following a symbol.
///
/// Returns `Some(1)` without moving when there is no marker. Returns `None`,
/// cursor untouched, for a malformed marker: doubled signs (`^--2`, `⁻⁻²`),
/// a hat followed by more than one digit (`^12`), missing digits or a zero
/// power.
pub fn try_read_power(text: &str, pos: &mut usize) -> Option<i32> {
    let start = *pos;
    let rest = text.get(start..)?;

    match rest.chars().next() {
        Some('^') => {
            let mut p = start + 1;
            let sign = try_read_sign(text, &mut p).unwrap_or(Sign::Positive);
            if try_read_sign(text, &mut p).is_some() {
                return None;
            }

            let bytes = text.as_bytes();
            let digit = match bytes.get(p) {
                Some(b) if b.is_ascii_digit() => i32::from(b - b'0'),
                _ => return None,
            };
            p += 1;
            if bytes.get(p).map_or(false, u8::is_ascii_digit) {
                return None;
            }

            finish(pos, p, sign.apply(digit))
        }
        Some(c) if is_superscript(c) => {
            let mut p = start;
            let sign = try_read_superscript_sign(text, &mut p).unwrap_or(Sign::Positive);
            if try_read_superscript_sign(text, &mut p).is_some() {
                return None;
            }

            let mut value: i32 = 0;
            let mut digits = 0;
            for c in text[p..].chars() {
                let Some(d) = superscript_digit(c) else {
                    break;
                };
                value = value.checked_mul(10)?.checked_add(d as i32)?;
                digits += 1;
                p += c.len_utf8();
            }

            if digits == 0 {
                return None;
            }

            finish(pos, p, sign.apply(value))
        }
        _ => Some(1),
    }
}

fn finish(pos: &mut usize, end: usize, power: i32) -> Option<i32> {
    if power == 0 {
        return None;
    }
    *pos = end;
    Some(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, start: usize) -> (Option<i32>, usize) {
        let mut pos = start;
        let result = try_read_power(text, &mut pos);
        (result, pos)
    }

    #[test]
    fn test_hat_notation() {
        assert_eq!(read("m^2", 1), (Some(2), 3));
        assert_eq!(read("s^-1", 1), (Some(-1), 4));
        assert_eq!(read("s^+3", 1), (Some(3), 4));
    }

    #[test]
    fn test_superscript_notation() {
        assert_eq!(read("m²", 1), (Some(2), "m²".len()));
        assert_eq!(read("s⁻¹", 1), (Some(-1), "s⁻¹".len()));
        assert_eq!(read("s⁺³", 1), (Some(3), "s⁺³".len()));
        assert_eq!(read("x¹²", 1), (Some(12), "x¹²".len()));
    }

    #[test]
    fn test_implicit_power() {
        assert_eq!(read("m", 1), (Some(1), 1));
        assert_eq!(read("m/s", 1), (Some(1), 1));
        assert_eq!(read("m s", 1), (Some(1), 1));
    }

    #[test]
    fn test_malformed_markers_rejected() {
        assert_eq!(read("m^--2", 1), (None, 1));
        assert_eq!(read("m^+-2", 1), (None, 1));
        assert_eq!(read("m⁻⁻²", 1), (None, 1));
        assert_eq!(read("m^12", 1), (None, 1));
        assert_eq!(read("m^", 1), (None, 1));
        assert_eq!(read("m^-", 1), (None, 1));
        assert_eq!(read("m⁻", 1), (None, 1));
        assert_eq!(read("m^0", 1), (None, 1));
        assert_eq!(read("m⁰", 1), (None, 1));
    }

    #[test]
    fn test_write_superscript() {
        let mut s = String::from("m");
        write_superscript_power(&mut s, 1);
        assert_eq!(s, "m");
        write_superscript_power(&mut s, -12);
        assert_eq!(s, "m⁻¹²");

        let mut s = String::from("s");
        write_superscript_power(&mut s, 3);
        assert_eq!(s, "s³");
    }

    #[test]
    fn test_write_hat() {
        let mut s = String::from("s");
        write_hat_power(&mut s, -2);
        assert_eq!(s, "s^-2");

        let mut s = String::from("m");
        write_hat_power(&mut s, 1);
        assert_eq!(s, "m");
    }
}
