//! Symbol comparison
//!
//! The micro sign and the ohm sign have canonical Greek twins. Both spellings
//! show up in real input, so every comparison folds them first.

use std::borrow::Cow;
use std::cmp::Ordering;

const MICRO_SIGN: char = '\u{B5}';
const GREEK_MU: char = '\u{3BC}';
const OHM_SIGN: char = '\u{2126}';
const GREEK_OMEGA: char = '\u{3A9}';

pub fn normalize_char(c: char) -> char {
    match c {
        MICRO_SIGN => GREEK_MU,
        OHM_SIGN => GREEK_OMEGA,
        c => c,
    }
}

/// Folded copy of `s`; borrowed when nothing needs folding.
pub fn normalize(s: &str) -> Cow<'_, str> {
    if s.chars().any(|c| normalize_char(c) != c) {
        Cow::Owned(s.chars().map(normalize_char).collect())
    } else {
        Cow::Borrowed(s)
    }
}

pub fn normalized_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(normalize_char)
}

/// Ordinal, per char, after folding.
pub fn cmp_symbols(a: &str, b: &str) -> Ordering {
    normalized_chars(a).cmp(normalized_chars(b))
}

pub fn eq_symbols(a: &str, b: &str) -> bool {
    cmp_symbols(a, b) == Ordering::Equal
}

/// Bytes of `text` consumed when `key` is a prefix of `text[pos..]`.
pub fn matches_at(key: &str, text: &str, pos: usize) -> Option<usize> {
    let rest = text.get(pos..)?;
    let mut text_chars = rest.chars();
    let mut consumed = 0;

    for k in normalized_chars(key) {
        let t = text_chars.next()?;
        if normalize_char(t) != k {
            return None;
        }
        consumed += t.len_utf8();
    }

    Some(consumed)
}
