//! Metron Units - Quantity kinds, unit resolution and quantity text
//!
//! Parses strings such as `"1.2 m/s²"` or `"6.789E6Pa"` into quantities of a
//! known kind and renders them back under composite formats (`"F2 mm"`).
//!
//! Kinds:
//! - Length, Mass, Time, Current, Temperature
//! - Speed, Acceleration, Force, Pressure, Energy, Power, Frequency
//! - Area, Volume, Density
//! - Voltage, Resistance
//! - Angle, Unitless (ratios, percent)
//!
//! Each kind resolves unit spellings through lazily built caches; a spelling
//! seen once is found by a single search the next time.

mod context;
mod dimension;
mod parse;
mod quantity;
mod quantity_format;
mod unit;
mod units;

pub use context::{CacheStats, CacheStatsSnapshot, UnitCaches};
pub use dimension::Dimension;
pub use parse::{
    parse_quantity, parse_quantity_with_styles, parse_unit, try_parse_quantity, try_parse_quantity_with_styles,
    try_parse_unit, try_read_unit,
};
pub use quantity::{Quantity, RELATIVE_TOLERANCE};
pub use quantity_format::QuantityFormat;
pub use unit::{Unit, UnitDef};
pub use units::{
    QuantityKind, ACCELERATION, ANGLE, AREA, CURRENT, DENSITY, ENERGY, FORCE, FREQUENCY, LENGTH, MASS, POWER,
    PRESSURE, QUANTITY_KINDS, RESISTANCE, SPEED, TEMPERATURE, TIME, UNITLESS, VOLTAGE, VOLUME,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{parse_quantity, try_parse_quantity, Quantity, QuantityFormat, QuantityKind, Unit};
    pub use metron_core::{Culture, MetronError, MetronResult, NumberStyles};
    pub use metron_format::SymbolFormat;
}
