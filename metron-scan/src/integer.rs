//! Integer reader

use metron_core::{MetronError, MetronResult};

/// Nine decimal digits always fit in an `i32`.
const SAFE_DIGITS: usize = 9;

/// Read an optionally signed decimal `i32`.
///
/// The first nine digits accumulate in `i32`; further digits continue in `i64`
/// and the read is rejected as soon as the magnitude leaves the `i32` range.
pub fn try_read_i32(text: &str, pos: &mut usize) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut i = *pos;

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut value: i32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() && i - digits_start < SAFE_DIGITS {
        value = value * 10 + i32::from(bytes[i] - b'0');
        i += 1;
    }

    if i == digits_start {
        return None;
    }

    let mut wide = i64::from(value);
    const LIMIT: i64 = i32::MAX as i64 + 1;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        wide = wide * 10 + i64::from(bytes[i] - b'0');
        if wide > LIMIT {
            return None;
        }
        i += 1;
    }

    let signed = if negative { -wide } else { wide };
    let result = i32::try_from(signed).ok()?;
    *pos = i;
    Some(result)
}

/// Throwing form of [`try_read_i32`].
pub fn read_i32(text: &str, pos: &mut usize) -> MetronResult<i32> {
    try_read_i32(text, pos)
        .ok_or_else(|| MetronError::parse("Expected an integer", text, *pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> (Option<i32>, usize) {
        let mut pos = 0;
        let result = try_read_i32(text, &mut pos);
        (result, pos)
    }

    #[test]
    fn test_simple() {
        assert_eq!(read("12"), (Some(12), 2));
        assert_eq!(read("-12m"), (Some(-12), 3));
        assert_eq!(read("+7"), (Some(7), 2));
        assert_eq!(read("007"), (Some(7), 3));
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(read("2147483647"), (Some(i32::MAX), 10));
        assert_eq!(read("-2147483648"), (Some(i32::MIN), 11));
        assert_eq!(read("999999999"), (Some(999_999_999), 9));
    }

    #[test]
    fn test_overflow_rejected() {
        assert_eq!(read("2147483648"), (None, 0));
        assert_eq!(read("-2147483649"), (None, 0));
        assert_eq!(read("99999999999999999999999"), (None, 0));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(read(""), (None, 0));
        assert_eq!(read("-"), (None, 0));
        assert_eq!(read("+m"), (None, 0));
        assert_eq!(read("m"), (None, 0));
    }

    #[test]
    fn test_offset_cursor() {
        let mut pos = 2;
        assert_eq!(try_read_i32("F2 12", &mut pos), None);
        assert_eq!(pos, 2);

        let mut pos = 1;
        assert_eq!(try_read_i32("F12 mm", &mut pos), Some(12));
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_read_i32_error_position() {
        let mut pos = 1;
        let err = read_i32("Fx", &mut pos).unwrap_err();
        match err {
            MetronError::Parse(e) => assert_eq!(e.position, 1),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(pos, 1);
    }
}
