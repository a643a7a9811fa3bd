//! Numeric sub-format tokens
//!
//! Standard tokens are a letter with an optional precision (`F2`, `e3`,
//! `G`, `R`). Custom tokens are `0`/`#` digit placeholders with optional
//! `,` grouping and one `.` (`0.00`, `#,##0.###`).

use metron_scan::try_read_i32;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// Shortest text that reads back to the same value (`R`, or no format)
    #[default]
    RoundTrip,
    /// `G<n>`: significant digits
    General { precision: Option<u32>, upper: bool },
    /// `F<n>`: fixed decimals
    Fixed(Option<u32>),
    /// `N<n>`: fixed decimals with group separators
    Number(Option<u32>),
    /// `E<n>`: scientific
    Exponent { precision: Option<u32>, upper: bool },
    Custom(CustomPattern),
}

/// A `0`/`#` pattern reduced to what rendering needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomPattern {
    pub pattern: String,
    pub min_integer_digits: usize,
    pub grouping: bool,
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
}

impl CustomPattern {
    fn new(pattern: &str) -> Self {
        let (integer, fraction) = match pattern.split_once('.') {
            Some((i, f)) => (i, f),
            None => (pattern, ""),
        };
        let zeros = fraction.bytes().filter(|&b| b == b'0').count();
        let hashes = fraction.bytes().filter(|&b| b == b'#').count();

        Self {
            pattern: pattern.to_string(),
            min_integer_digits: integer.bytes().filter(|&b| b == b'0').count(),
            grouping: integer.contains(','),
            min_fraction_digits: zeros,
            max_fraction_digits: zeros + hashes,
        }
    }
}

/// Largest precision accepted after a format letter
const MAX_PRECISION: u32 = 99;

impl NumberFormat {
    /// Parse a whole string as one numeric token. Empty text is the default
    /// format.
    pub fn parse(text: &str) -> Option<NumberFormat> {
        if text.is_empty() {
            return Some(NumberFormat::default());
        }
        let mut pos = 0;
        let format = try_read_number_format(text, &mut pos)?;
        (pos == text.len()).then_some(format)
    }
}

/// Read one numeric format token at `pos`.
pub fn try_read_number_format(text: &str, pos: &mut usize) -> Option<NumberFormat> {
    let bytes = text.as_bytes();
    let start = *pos;
    let first = *bytes.get(start)?;

    if first == b'0' || first == b'#' {
        let end = custom_pattern_end(bytes, start);
        *pos = end;
        return Some(NumberFormat::Custom(CustomPattern::new(&text[start..end])));
    }

    let upper = first.is_ascii_uppercase();
    let letter = first.to_ascii_lowercase();
    if !matches!(letter, b'e' | b'f' | b'g' | b'n' | b'r') {
        return None;
    }

    let mut end = start + 1;
    // unsigned: only a digit may follow the letter
    let precision = if bytes.get(end).map_or(false, u8::is_ascii_digit) {
        let value = try_read_i32(text, &mut end)?;
        Some(u32::try_from(value).ok().filter(|&p| p <= MAX_PRECISION)?)
    } else {
        None
    };

    let format = match letter {
        b'e' => NumberFormat::Exponent { precision, upper },
        b'f' => NumberFormat::Fixed(precision),
        b'g' => NumberFormat::General { precision, upper },
        b'n' => NumberFormat::Number(precision),
        _ => NumberFormat::RoundTrip,
    };
    *pos = end;
    Some(format)
}

/// `0`/`#` run; a `,` or `.` belongs to the pattern only when another
/// placeholder follows it, and only the first `.` counts.
fn custom_pattern_end(bytes: &[u8], start: usize) -> usize {
    let is_placeholder = |i: usize| matches!(bytes.get(i), Some(b'0' | b'#'));
    let mut i = start;
    let mut seen_point = false;

    loop {
        match bytes.get(i) {
            Some(b'0' | b'#') => i += 1,
            Some(b',') if !seen_point && is_placeholder(i + 1) => i += 1,
            Some(b'.') if !seen_point && is_placeholder(i + 1) => {
                seen_point = true;
                i += 1;
            }
            _ => return i,
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn letter(f: &mut fmt::Formatter<'_>, c: char, precision: &Option<u32>) -> fmt::Result {
            match precision {
                Some(p) => write!(f, "{}{}", c, p),
                None => write!(f, "{}", c),
            }
        }

        match self {
            NumberFormat::RoundTrip => f.write_str("R"),
            NumberFormat::General { precision, upper } => letter(f, if *upper { 'G' } else { 'g' }, precision),
            NumberFormat::Fixed(precision) => letter(f, 'F', precision),
            NumberFormat::Number(precision) => letter(f, 'N', precision),
            NumberFormat::Exponent { precision, upper } => letter(f, if *upper { 'E' } else { 'e' }, precision),
            NumberFormat::Custom(pattern) => f.write_str(&pattern.pattern),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> (Option<NumberFormat>, usize) {
        let mut pos = 0;
        let format = try_read_number_format(text, &mut pos);
        (format, pos)
    }

    #[test]
    fn test_standard_letters() {
        assert_eq!(read("F2 m"), (Some(NumberFormat::Fixed(Some(2))), 2));
        assert_eq!(read("f"), (Some(NumberFormat::Fixed(None)), 1));
        assert_eq!(read("N0"), (Some(NumberFormat::Number(Some(0))), 2));
        assert_eq!(read("r"), (Some(NumberFormat::RoundTrip), 1));
        assert_eq!(
            read("e3"),
            (Some(NumberFormat::Exponent { precision: Some(3), upper: false }), 2)
        );
        assert_eq!(
            read("G12km"),
            (Some(NumberFormat::General { precision: Some(12), upper: true }), 3)
        );
    }

    #[test]
    fn test_not_a_format() {
        assert_eq!(read("m"), (None, 0));
        assert_eq!(read(""), (None, 0));
        assert_eq!(read("X2"), (None, 0));
        assert_eq!(read("F100"), (None, 0));
        assert_eq!(read("F99999999999"), (None, 0));
        assert_eq!(read("F-2"), (Some(NumberFormat::Fixed(None)), 1));
        assert_eq!(read("E+3"), (Some(NumberFormat::Exponent { precision: None, upper: true }), 1));
    }

    #[test]
    fn test_custom_patterns() {
        let (format, pos) = read("0.00 m");
        assert_eq!(pos, 4);
        let Some(NumberFormat::Custom(p)) = format else {
            panic!("expected a custom pattern");
        };
        assert_eq!((p.min_integer_digits, p.min_fraction_digits, p.max_fraction_digits), (1, 2, 2));
        assert!(!p.grouping);

        let (format, pos) = read("#,##0.0## km");
        assert_eq!(pos, 9);
        let Some(NumberFormat::Custom(p)) = format else {
            panic!("expected a custom pattern");
        };
        assert_eq!((p.min_integer_digits, p.min_fraction_digits, p.max_fraction_digits), (1, 1, 3));
        assert!(p.grouping);
    }

    #[test]
    fn test_custom_pattern_stops_at_dangling_separator() {
        assert_eq!(read("0. m").1, 1);
        assert_eq!(read("00, m").1, 2);
        assert_eq!(read("0.0.0").1, 3);
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(NumberFormat::parse(""), Some(NumberFormat::RoundTrip));
        assert_eq!(NumberFormat::parse("F3"), Some(NumberFormat::Fixed(Some(3))));
        assert_eq!(NumberFormat::parse("F3 "), None);
        assert_eq!(NumberFormat::parse("abc"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberFormat::parse("e4").unwrap().to_string(), "e4");
        assert_eq!(NumberFormat::parse("#,##0.00").unwrap().to_string(), "#,##0.00");
        assert_eq!(NumberFormat::default().to_string(), "R");
    }
}
