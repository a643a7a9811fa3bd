//! Number style flags
//!
//! `NumberStyles` mirrors the familiar parse-style bit set. The double reader
//! only understands part of it, so it takes a `FloatStyles`, which can only be
//! built from a combination it supports.

use crate::{MetronError, MetronResult};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bit flags controlling which elements a numeric literal may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NumberStyles(u32);

impl NumberStyles {
    pub const NONE: NumberStyles = NumberStyles(0);
    pub const ALLOW_LEADING_WHITE: NumberStyles = NumberStyles(0x0001);
    pub const ALLOW_TRAILING_WHITE: NumberStyles = NumberStyles(0x0002);
    pub const ALLOW_LEADING_SIGN: NumberStyles = NumberStyles(0x0004);
    pub const ALLOW_TRAILING_SIGN: NumberStyles = NumberStyles(0x0008);
    pub const ALLOW_PARENTHESES: NumberStyles = NumberStyles(0x0010);
    pub const ALLOW_DECIMAL_POINT: NumberStyles = NumberStyles(0x0020);
    pub const ALLOW_THOUSANDS: NumberStyles = NumberStyles(0x0040);
    pub const ALLOW_EXPONENT: NumberStyles = NumberStyles(0x0080);
    pub const ALLOW_CURRENCY_SYMBOL: NumberStyles = NumberStyles(0x0100);
    pub const ALLOW_HEX_SPECIFIER: NumberStyles = NumberStyles(0x0200);

    pub const INTEGER: NumberStyles = NumberStyles(0x0007);
    pub const NUMBER: NumberStyles = NumberStyles(0x006F);
    pub const FLOAT: NumberStyles = NumberStyles(0x00A7);
    pub const ANY: NumberStyles = NumberStyles(0x01FF);

    const ALL_BITS: u32 = 0x03FF;

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> NumberStyles {
        NumberStyles(bits)
    }

    pub const fn contains(self, other: NumberStyles) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: NumberStyles) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for NumberStyles {
    type Output = NumberStyles;

    fn bitor(self, rhs: NumberStyles) -> NumberStyles {
        NumberStyles(self.0 | rhs.0)
    }
}

impl BitOrAssign for NumberStyles {
    fn bitor_assign(&mut self, rhs: NumberStyles) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for NumberStyles {
    type Output = NumberStyles;

    fn bitand(self, rhs: NumberStyles) -> NumberStyles {
        NumberStyles(self.0 & rhs.0)
    }
}

impl fmt::Display for NumberStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(NumberStyles, &str); 10] = [
            (NumberStyles::ALLOW_LEADING_WHITE, "AllowLeadingWhite"),
            (NumberStyles::ALLOW_TRAILING_WHITE, "AllowTrailingWhite"),
            (NumberStyles::ALLOW_LEADING_SIGN, "AllowLeadingSign"),
            (NumberStyles::ALLOW_TRAILING_SIGN, "AllowTrailingSign"),
            (NumberStyles::ALLOW_PARENTHESES, "AllowParentheses"),
            (NumberStyles::ALLOW_DECIMAL_POINT, "AllowDecimalPoint"),
            (NumberStyles::ALLOW_THOUSANDS, "AllowThousands"),
            (NumberStyles::ALLOW_EXPONENT, "AllowExponent"),
            (NumberStyles::ALLOW_CURRENCY_SYMBOL, "AllowCurrencySymbol"),
            (NumberStyles::ALLOW_HEX_SPECIFIER, "AllowHexSpecifier"),
        ];

        let parts: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Styles accepted by the floating point reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatStyles(NumberStyles);

impl FloatStyles {
    /// `NumberStyles::FLOAT`, which is what quantity parsing uses.
    pub const FLOAT: FloatStyles = FloatStyles(NumberStyles::FLOAT);

    /// Validate `styles` for floating point reading.
    pub fn new(styles: NumberStyles) -> MetronResult<FloatStyles> {
        if styles.bits() & !NumberStyles::ALL_BITS != 0 {
            return Err(MetronError::InvalidStyle(format!(
                "unknown bits 0x{:X}",
                styles.bits() & !NumberStyles::ALL_BITS
            )));
        }

        if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
            return Err(MetronError::InvalidStyle(
                "AllowHexSpecifier is not supported for floating point".to_string(),
            ));
        }

        let unsupported = NumberStyles::ALLOW_TRAILING_SIGN
            | NumberStyles::ALLOW_PARENTHESES
            | NumberStyles::ALLOW_CURRENCY_SYMBOL;
        if styles.intersects(unsupported) {
            return Err(MetronError::InvalidStyle(format!(
                "{} is not supported",
                styles & unsupported
            )));
        }

        Ok(FloatStyles(styles))
    }

    pub fn styles(self) -> NumberStyles {
        self.0
    }

    pub fn allows(self, flag: NumberStyles) -> bool {
        self.0.contains(flag)
    }
}

impl Default for FloatStyles {
    fn default() -> Self {
        FloatStyles::FLOAT
    }
}

impl TryFrom<NumberStyles> for FloatStyles {
    type Error = MetronError;

    fn try_from(styles: NumberStyles) -> MetronResult<Self> {
        FloatStyles::new(styles)
    }
}
