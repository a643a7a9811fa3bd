//! Culture-specific number symbols
//!
//! A `Culture` is the small subset of locale data the numeric scanner and
//! renderer need: separators, signs and the non-finite literals. Cultures are
//! plain `'static` data so they can be shared freely between threads.

use std::fmt;

/// Number symbols for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Culture {
    /// Locale name, e.g. "en-US". Empty for the invariant culture.
    pub name: &'static str,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    pub negative_sign: &'static str,
    pub positive_sign: &'static str,
    pub nan_symbol: &'static str,
    pub positive_infinity_symbol: &'static str,
    pub negative_infinity_symbol: &'static str,
}

impl Culture {
    pub const INVARIANT: Culture = Culture {
        name: "",
        decimal_separator: ".",
        group_separator: ",",
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "Infinity",
        negative_infinity_symbol: "-Infinity",
    };

    pub const EN_US: Culture = Culture {
        name: "en-US",
        decimal_separator: ".",
        group_separator: ",",
        negative_sign: "-",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "∞",
        negative_infinity_symbol: "-∞",
    };

    pub const EN_GB: Culture = Culture {
        name: "en-GB",
        ..Culture::EN_US
    };

    pub const DE_DE: Culture = Culture {
        name: "de-DE",
        decimal_separator: ",",
        group_separator: ".",
        ..Culture::EN_US
    };

    pub const FR_FR: Culture = Culture {
        name: "fr-FR",
        decimal_separator: ",",
        group_separator: "\u{202F}",
        ..Culture::EN_US
    };

    pub const SV_SE: Culture = Culture {
        name: "sv-SE",
        decimal_separator: ",",
        group_separator: "\u{A0}",
        negative_sign: "\u{2212}",
        positive_sign: "+",
        nan_symbol: "NaN",
        positive_infinity_symbol: "∞",
        negative_infinity_symbol: "\u{2212}∞",
    };

    pub const NB_NO: Culture = Culture {
        name: "nb-NO",
        ..Culture::SV_SE
    };

    /// All built-in cultures
    pub const ALL: [&'static Culture; 7] = [
        &Culture::INVARIANT,
        &Culture::EN_US,
        &Culture::EN_GB,
        &Culture::DE_DE,
        &Culture::FR_FR,
        &Culture::SV_SE,
        &Culture::NB_NO,
    ];

    /// Look up a culture by name, ignoring ASCII case.
    /// `""` and `"invariant"` both return the invariant culture.
    pub fn by_name(name: &str) -> Option<&'static Culture> {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("invariant") {
            return Some(&Culture::INVARIANT);
        }
        Culture::ALL
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }
}

impl Default for Culture {
    fn default() -> Self {
        Culture::INVARIANT
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.name)
        }
    }
}
