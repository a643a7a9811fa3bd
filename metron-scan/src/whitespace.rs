//! Whitespace reader

use std::borrow::Cow;

/// Whitespace captured around a format fragment
pub type Padding = Cow<'static, str>;

pub const SPACE: &str = " ";
pub const NO_BREAK_SPACE: &str = "\u{A0}";

/// Read a run of Unicode whitespace starting at `pos`.
/// Returns `None` (cursor untouched) when there is none.
pub fn try_read_whitespace<'a>(text: &'a str, pos: &mut usize) -> Option<&'a str> {
    let start = *pos;
    let rest = text.get(start..)?;
    let len: usize = rest
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();

    if len == 0 {
        return None;
    }

    *pos = start + len;
    Some(&text[start..start + len])
}

/// Advance past any whitespace. Never fails.
pub fn skip_whitespace(text: &str, pos: &mut usize) {
    let _ = try_read_whitespace(text, pos);
}

/// Read whitespace as an owned padding value.
///
/// The empty string, a single space and a single no-break space borrow shared
/// statics; only unusual runs allocate.
pub fn read_padding(text: &str, pos: &mut usize) -> Padding {
    match try_read_whitespace(text, pos) {
        None => Cow::Borrowed(""),
        Some(ws) => shared_padding(ws),
    }
}

pub fn shared_padding(ws: &str) -> Padding {
    match ws {
        "" => Cow::Borrowed(""),
        SPACE => Cow::Borrowed(SPACE),
        NO_BREAK_SPACE => Cow::Borrowed(NO_BREAK_SPACE),
        other => Cow::Owned(other.to_string()),
    }
}
