//! Metron Core - Fundamental types
//!
//! This crate provides the types shared by every Metron layer:
//! - `MetronError` / `ParseError`: structured errors with codes and a caret pointer
//! - `Culture`: decimal/group separators, signs and non-finite symbols
//! - `NumberStyles` / `FloatStyles`: which parts a numeric literal may contain

mod culture;
mod error;
mod styles;

pub use culture::Culture;
pub use error::{codes, ErrorReport, MetronError, MetronResult, ParseError};
pub use styles::{FloatStyles, NumberStyles};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{Culture, FloatStyles, MetronError, MetronResult, NumberStyles, ParseError};
}
