//! Metron Cache - Lock-free read caches
//!
//! - `SortedCache`: sorted `(symbol, value)` array with exact and
//!   longest-prefix lookup
//! - `SymbolSet`: order-independent tokenized unit expression
//! - `SymbolSetMap`: symbol set <-> value
//!
//! Reads load an immutable snapshot through `ArcSwap`; writes copy, modify
//! and publish under a mutex.

mod bimap;
mod compare;
mod sorted;
mod symbol_set;

pub use bimap::SymbolSetMap;
pub use compare::{cmp_symbols, eq_symbols, matches_at, normalize, normalize_char};
pub use sorted::{CacheEntry, PrefixMatch, SortedCache};
pub use symbol_set::SymbolSet;
