//! Structured errors
//!
//! Readers report "not found" through `Option` and cursor rollback. The
//! types here are for the throwing wrappers and the outer surfaces, where a
//! failure should carry a code, a message and (for parse failures) a pointer
//! into the offending text.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_QUANTITY: &str = "UNKNOWN_QUANTITY";
    pub const UNKNOWN_CULTURE: &str = "UNKNOWN_CULTURE";
    pub const INVALID_STYLE: &str = "INVALID_STYLE";
    pub const CACHE_CONFLICT: &str = "CACHE_CONFLICT";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
}

/// Text that could not be read at `position` (a byte offset into `text`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub message: String,
    pub text: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, text: &str, position: usize) -> Self {
        Self {
            message: message.into(),
            text: text.to_string(),
            position,
        }
    }

    /// Column of the failing character, counted in chars rather than bytes.
    pub fn column(&self) -> usize {
        let end = self.position.min(self.text.len());
        self.text
            .char_indices()
            .take_while(|(i, _)| *i < end)
            .count()
    }

    /// Two-line rendering with a caret under the failing character:
    ///
    /// ```text
    /// String: abcdef
    ///            ^
    /// ```
    pub fn pointer(&self) -> String {
        const PREFIX: &str = "String: ";
        format!(
            "{}{}\n{}^",
            PREFIX,
            self.text,
            " ".repeat(PREFIX.len() + self.column())
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}\n{}", self.message, self.position, self.pointer())
    }
}

impl std::error::Error for ParseError {}

/// Error type shared by all Metron crates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetronError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown unit '{symbol}' for {quantity}")]
    UnknownUnit { quantity: String, symbol: String },

    #[error("Unknown quantity: {0}")]
    UnknownQuantity(String),

    #[error("Unknown culture: {0}")]
    UnknownCulture(String),

    #[error("Invalid number style: {0}")]
    InvalidStyle(String),

    #[error("Conflicting cache entry for key '{key}'")]
    CacheConflict { key: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl MetronError {
    pub fn parse(message: impl Into<String>, text: &str, position: usize) -> Self {
        Self::Parse(ParseError::new(message, text, position))
    }

    pub fn unknown_unit(quantity: &str, symbol: &str) -> Self {
        Self::UnknownUnit {
            quantity: quantity.to_string(),
            symbol: symbol.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            MetronError::Parse(_) => codes::PARSE_ERROR,
            MetronError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            MetronError::UnknownQuantity(_) => codes::UNKNOWN_QUANTITY,
            MetronError::UnknownCulture(_) => codes::UNKNOWN_CULTURE,
            MetronError::InvalidStyle(_) => codes::INVALID_STYLE,
            MetronError::CacheConflict { .. } => codes::CACHE_CONFLICT,
            MetronError::InvalidRequest(_) => codes::INVALID_REQUEST,
        }
    }

    /// Serializable summary for outer surfaces
    pub fn report(&self) -> ErrorReport {
        let position = match self {
            MetronError::Parse(e) => Some(e.position),
            _ => None,
        };
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            position,
        }
    }
}

/// Machine-readable error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Result type for Metron operations
pub type MetronResult<T> = Result<T, MetronError>;
