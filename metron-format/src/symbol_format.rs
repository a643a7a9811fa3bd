//! Unit symbol rendering styles

use metron_scan::{write_hat_power, write_superscript_power, SymbolAndPower};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a compound unit symbol is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolFormat {
    /// `kg⋅m/s²`
    #[default]
    FractionSuperScript,
    /// `kg*m/s^2`
    FractionHatPowers,
    /// `kg⋅m⋅s⁻²`
    SignedSuperScript,
    /// `kg*m*s^-2`
    SignedHatPowers,
}

impl SymbolFormat {
    pub const ALL: [SymbolFormat; 4] = [
        SymbolFormat::FractionSuperScript,
        SymbolFormat::FractionHatPowers,
        SymbolFormat::SignedSuperScript,
        SymbolFormat::SignedHatPowers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SymbolFormat::FractionSuperScript => "fraction-superscript",
            SymbolFormat::FractionHatPowers => "fraction-hat-powers",
            SymbolFormat::SignedSuperScript => "signed-superscript",
            SymbolFormat::SignedHatPowers => "signed-hat-powers",
        }
    }

    /// Case-insensitive lookup by [`name`](Self::name).
    pub fn by_name(name: &str) -> Option<SymbolFormat> {
        Self::ALL.into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }

    fn is_fraction(self) -> bool {
        matches!(self, SymbolFormat::FractionSuperScript | SymbolFormat::FractionHatPowers)
    }

    fn is_superscript(self) -> bool {
        matches!(self, SymbolFormat::FractionSuperScript | SymbolFormat::SignedSuperScript)
    }
}

impl fmt::Display for SymbolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write `tokens` in `style`. A fraction with nothing above the line falls
/// back to the signed form (`s⁻¹`, not `1/s`).
pub fn render_symbol(tokens: &[SymbolAndPower], style: SymbolFormat) -> String {
    let separator = if style.is_superscript() { "⋅" } else { "*" };
    let numerator = tokens.iter().any(|t| t.power > 0);
    let mut out = String::new();

    if style.is_fraction() && numerator {
        push_tokens(&mut out, tokens.iter().filter(|t| t.power > 0), separator, style, 1);
        let mut denominator = tokens.iter().filter(|t| t.power < 0).peekable();
        if denominator.peek().is_some() {
            out.push('/');
            push_tokens(&mut out, denominator, separator, style, -1);
        }
    } else {
        push_tokens(&mut out, tokens.iter(), separator, style, 1);
    }
    out
}

fn push_tokens<'a>(
    out: &mut String,
    tokens: impl Iterator<Item = &'a SymbolAndPower>,
    separator: &str,
    style: SymbolFormat,
    scale: i32,
) {
    for (i, token) in tokens.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&token.symbol);
        let power = token.power * scale;
        if style.is_superscript() {
            write_superscript_power(out, power);
        } else {
            write_hat_power(out, power);
        }
    }
}
