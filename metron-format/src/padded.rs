//! Format fragments with their surrounding whitespace

use crate::number_format::try_read_number_format;
use metron_scan::{shared_padding, try_read_whitespace, Padding};

/// A format fragment and the whitespace written around it.
///
/// `None` padding means the text did not say; composite formats infer it
/// from the neighbouring fragment. `Some("")` is never produced by parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PaddedFormat {
    pub pre_padding: Option<Padding>,
    pub format: String,
    pub post_padding: Option<Padding>,
    /// The text was not understood; `format` holds it verbatim.
    pub is_unknown: bool,
}

impl PaddedFormat {
    pub fn new(pre_padding: Option<Padding>, format: impl Into<String>, post_padding: Option<Padding>) -> Self {
        Self {
            pre_padding,
            format: format.into(),
            post_padding,
            is_unknown: false,
        }
    }

    pub fn unknown(text: &str) -> Self {
        Self {
            pre_padding: None,
            format: text.to_string(),
            post_padding: None,
            is_unknown: true,
        }
    }

    pub fn pre(&self) -> &str {
        self.pre_padding.as_deref().unwrap_or("")
    }

    pub fn post(&self) -> &str {
        self.post_padding.as_deref().unwrap_or("")
    }
}

/// Optional whitespace at `pos`, as padding.
pub fn try_read_padding(text: &str, pos: &mut usize) -> Option<Padding> {
    try_read_whitespace(text, pos).map(shared_padding)
}

/// Parse `text` as a single padded numeric format (`" F2 "`). Empty text is
/// the default format; anything unrecognised, or text left over after the
/// token, gives an unknown format.
pub fn parse_padded_number_format(text: &str) -> PaddedFormat {
    let mut pos = 0;
    let pre = try_read_padding(text, &mut pos);
    let start = pos;

    if start == text.len() {
        return PaddedFormat::new(pre, "", None);
    }

    if try_read_number_format(text, &mut pos).is_none() {
        return PaddedFormat::unknown(text);
    }
    let format = &text[start..pos];
    let post = try_read_padding(text, &mut pos);

    if pos != text.len() {
        return PaddedFormat::unknown(text);
    }
    PaddedFormat::new(pre, format, post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_paddings_recorded() {
        let f = parse_padded_number_format(" F2\u{A0}");
        assert_eq!(f.format, "F2");
        assert_eq!(f.pre_padding, Some(Cow::Borrowed(" ")));
        assert_eq!(f.post_padding, Some(Cow::Borrowed("\u{A0}")));
        assert!(!f.is_unknown);
    }

    #[test]
    fn test_unspecified_padding_is_none() {
        let f = parse_padded_number_format("0.00");
        assert_eq!(f.pre_padding, None);
        assert_eq!(f.post_padding, None);
        assert_eq!(f.pre(), "");
    }

    #[test]
    fn test_empty_is_default() {
        let f = parse_padded_number_format("");
        assert_eq!(f.format, "");
        assert!(!f.is_unknown);
    }

    #[test]
    fn test_unknown() {
        for text in ["xyz", "F2 m", "F2x"] {
            let f = parse_padded_number_format(text);
            assert!(f.is_unknown, "{text}");
            assert_eq!(f.format, text);
        }
    }
}
