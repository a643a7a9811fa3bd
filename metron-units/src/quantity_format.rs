//! Composite quantity formats
//!
//! A format string has the shape `[pad]<number>[pad]<unit>[pad]`, where
//! either half may be left out. Parsing happens once per distinct string per
//! kind (see `QuantityKind::quantity_format`); rendering only applies the
//! stored plan.

use crate::parse::try_read_unit;
use crate::quantity::Quantity;
use crate::unit::Unit;
use crate::units::QuantityKind;
use metron_core::Culture;
use metron_format::{format_f64, try_read_number_format, try_read_padding, NumberFormat, PaddedFormat};
use metron_scan::{skip_whitespace, Padding, NO_BREAK_SPACE};
use std::borrow::Cow;

/// A resolved number + unit rendering plan.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityFormat {
    pub number: PaddedFormat,
    pub symbol: PaddedFormat,
    /// Target unit; `None` renders in the quantity's own unit.
    pub unit: Option<Unit>,
    pub number_format: NumberFormat,
    /// Whitespace between the number and the symbol
    pub middle: Padding,
    source: String,
}

impl QuantityFormat {
    /// Join a number fragment and a symbol fragment.
    ///
    /// The whitespace between them comes from whichever side specified it;
    /// both sides are concatenated and neither side gives a no-break space.
    pub fn compose(number: PaddedFormat, symbol: PaddedFormat, unit: Option<Unit>) -> Self {
        let middle = match (&number.post_padding, &symbol.pre_padding) {
            (Some(post), None) => post.clone(),
            (None, Some(pre)) => pre.clone(),
            (Some(post), Some(pre)) => Cow::Owned(format!("{post}{pre}")),
            (None, None) => Cow::Borrowed(NO_BREAK_SPACE),
        };

        let parsed = if number.is_unknown {
            None
        } else {
            NumberFormat::parse(&number.format)
        };
        let source = format!(
            "{}{}{}{}{}",
            number.pre(),
            number.format,
            middle,
            symbol.format,
            symbol.post()
        );

        let (number, number_format) = match parsed {
            Some(format) => (number, format),
            None => (PaddedFormat::unknown(&number.format), NumberFormat::default()),
        };

        QuantityFormat {
            number,
            symbol,
            unit,
            number_format,
            middle,
            source,
        }
    }

    /// Round-trip number, no-break space, the quantity's own symbol.
    pub fn default_plan() -> Self {
        Self::compose(PaddedFormat::default(), PaddedFormat::default(), None)
    }

    /// A plan that renders `text` back verbatim.
    pub fn unknown(text: &str) -> Self {
        QuantityFormat {
            number: PaddedFormat::unknown(text),
            symbol: PaddedFormat::unknown(text),
            unit: None,
            number_format: NumberFormat::default(),
            middle: Cow::Borrowed(""),
            source: text.to_string(),
        }
    }

    /// Parse a composite format for `kind`. Never fails: text that is not
    /// understood gives an unknown plan.
    ///
    /// Text that reads as a unit of `kind` from end to end is a unit, so
    /// `nm` and `GHz` are never split into a number letter and a shorter
    /// unit.
    pub fn parse(kind: &'static QuantityKind, text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default_plan();
        }
        let mut format = unit_only(kind, text)
            .or_else(|| number_then_unit(kind, text))
            .unwrap_or_else(|| Self::unknown(text));
        format.source = text.to_string();
        format
    }

    pub fn is_unknown(&self) -> bool {
        self.number.is_unknown || self.symbol.is_unknown
    }

    /// The format text this plan was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, quantity: &Quantity, culture: &Culture) -> String {
        if self.is_unknown() {
            return self.source.clone();
        }

        let unit = self.unit.unwrap_or(quantity.unit);
        let value = quantity.unit.convert(quantity.value, unit);
        let symbol = if self.symbol.format.is_empty() {
            unit.symbol()
        } else {
            self.symbol.format.as_str()
        };

        let mut out = String::with_capacity(32);
        out.push_str(self.number.pre());
        out.push_str(&format_f64(value, &self.number_format, culture));
        if !symbol.is_empty() {
            out.push_str(&self.middle);
            out.push_str(symbol);
        }
        out.push_str(self.symbol.post());
        out
    }
}

impl Default for QuantityFormat {
    fn default() -> Self {
        Self::default_plan()
    }
}

/// `[pad]<number>[pad][<unit>[pad]]`
///
/// The padded number half goes through the kind's numeric format cache.
fn number_then_unit(kind: &'static QuantityKind, text: &str) -> Option<QuantityFormat> {
    let mut pos = 0;
    skip_whitespace(text, &mut pos);
    try_read_number_format(text, &mut pos)?;
    skip_whitespace(text, &mut pos);

    let number = kind.number_format(&text[..pos]);
    if number.is_unknown {
        return None;
    }
    let number = PaddedFormat::clone(&number);

    if pos == text.len() {
        return Some(QuantityFormat::compose(number, PaddedFormat::default(), None));
    }

    let symbol_start = pos;
    let unit = try_read_unit(kind, text, &mut pos)?;
    let symbol_text = &text[symbol_start..pos];
    let post = try_read_padding(text, &mut pos);
    if pos != text.len() {
        return None;
    }

    Some(QuantityFormat::compose(
        number,
        PaddedFormat::new(None, symbol_text, post),
        Some(unit),
    ))
}

/// `[pad]<unit>[pad]`
fn unit_only(kind: &'static QuantityKind, text: &str) -> Option<QuantityFormat> {
    let mut pos = 0;
    let pre = try_read_padding(text, &mut pos);
    let start = pos;
    let unit = try_read_unit(kind, text, &mut pos)?;
    let symbol_text = &text[start..pos];
    let post = try_read_padding(text, &mut pos);
    if pos != text.len() {
        return None;
    }

    Some(QuantityFormat::compose(
        PaddedFormat::default(),
        PaddedFormat::new(pre, symbol_text, post),
        Some(unit),
    ))
}
