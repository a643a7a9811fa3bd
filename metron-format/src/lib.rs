//! Metron Format - Rendering numbers and unit symbols
//!
//! - `NumberFormat`: numeric tokens (`F2`, `E3`, `G`, `R`, `#,##0.00`)
//! - `format_f64`: culture-aware rendering of a number under a token
//! - `PaddedFormat`: a fragment with its surrounding whitespace
//! - `SymbolFormat`: how compound unit symbols are written

mod number_format;
mod padded;
mod render;
mod symbol_format;

pub use number_format::{try_read_number_format, CustomPattern, NumberFormat};
pub use padded::{parse_padded_number_format, try_read_padding, PaddedFormat};
pub use render::format_f64;
pub use symbol_format::{render_symbol, SymbolFormat};
