//! Per-kind lookup caches
//!
//! Each quantity kind owns one `UnitContext`. Its caches are built from the
//! kind's unit table the first time they are needed and then only grow:
//! spellings and format strings seen in input are memoized so the next
//! lookup of the same text is a single search.

use crate::quantity_format::QuantityFormat;
use crate::unit::Unit;
use crate::units::QuantityKind;
use metron_cache::{SortedCache, SymbolSet, SymbolSetMap};
use metron_format::PaddedFormat;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::debug;

pub struct UnitCaches {
    /// Spelling -> unit, searched by longest prefix
    pub symbols: SortedCache<Unit>,
    /// Tokenized expression <-> unit
    pub sets: SymbolSetMap<Unit>,
    pub number_formats: SortedCache<Arc<PaddedFormat>>,
    pub quantity_formats: SortedCache<Arc<QuantityFormat>>,
}

impl UnitCaches {
    /// # Panics
    ///
    /// Panics when two units of `kind` claim the same spelling or the same
    /// symbol set. Unit tables are static, so this is a programming error.
    fn seed(kind: &'static QuantityKind) -> Self {
        let caches = UnitCaches {
            symbols: SortedCache::new(),
            sets: SymbolSetMap::new(),
            number_formats: SortedCache::new(),
            quantity_formats: SortedCache::new(),
        };

        for unit in kind.units() {
            for spelling in unit.spellings().filter(|s| !s.is_empty()) {
                caches.symbols.add(spelling, unit);
                if let Some(set) = SymbolSet::parse(spelling) {
                    register_set(kind, &caches.sets, set, unit);
                }
            }
        }

        let base = kind.dimension.base_symbols();
        if !base.is_empty() {
            register_set(kind, &caches.sets, SymbolSet::new(base), kind.si_unit());
        }

        debug!(
            kind = kind.name,
            symbols = caches.symbols.len(),
            sets = caches.sets.len(),
            "unit caches initialised"
        );
        caches
    }
}

fn register_set(kind: &QuantityKind, sets: &SymbolSetMap<Unit>, set: SymbolSet, unit: Unit) {
    if let Err(err) = sets.try_add(set, unit) {
        panic!("{}: {err}", kind.name);
    }
}

/// Counters for the lookup paths, mostly for tests and diagnostics.
#[derive(Debug, Default)]
pub struct CacheStats {
    fast_path_hits: AtomicU64,
    tokenizer_runs: AtomicU64,
    memoized_spellings: AtomicU64,
    format_hits: AtomicU64,
    format_misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    pub fast_path_hits: u64,
    pub tokenizer_runs: u64,
    pub memoized_spellings: u64,
    pub format_hits: u64,
    pub format_misses: u64,
}

impl CacheStats {
    pub const fn new() -> Self {
        CacheStats {
            fast_path_hits: AtomicU64::new(0),
            tokenizer_runs: AtomicU64::new(0),
            memoized_spellings: AtomicU64::new(0),
            format_hits: AtomicU64::new(0),
            format_misses: AtomicU64::new(0),
        }
    }

    pub(crate) fn fast_path_hit(&self) {
        self.fast_path_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn tokenizer_run(&self) {
        self.tokenizer_runs.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn memoized(&self) {
        self.memoized_spellings.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn format_hit(&self) {
        self.format_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn format_miss(&self) {
        self.format_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            fast_path_hits: self.fast_path_hits.load(Ordering::Relaxed),
            tokenizer_runs: self.tokenizer_runs.load(Ordering::Relaxed),
            memoized_spellings: self.memoized_spellings.load(Ordering::Relaxed),
            format_hits: self.format_hits.load(Ordering::Relaxed),
            format_misses: self.format_misses.load(Ordering::Relaxed),
        }
    }
}

pub struct UnitContext {
    caches: OnceLock<UnitCaches>,
    stats: CacheStats,
}

impl UnitContext {
    pub const fn new() -> Self {
        UnitContext {
            caches: OnceLock::new(),
            stats: CacheStats::new(),
        }
    }

    pub(crate) fn caches(&self, kind: &'static QuantityKind) -> &UnitCaches {
        self.caches.get_or_init(|| UnitCaches::seed(kind))
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn is_initialised(&self) -> bool {
        self.caches.get().is_some()
    }
}

impl Default for UnitContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FORCE_UNITS, RESISTANCE_UNITS};
    use crate::Dimension;

    static FRESH_FORCE: QuantityKind = QuantityKind::new("Force", Dimension::FORCE, FORCE_UNITS);

    #[test]
    fn test_lazy_initialisation() {
        static LAZY: QuantityKind = QuantityKind::new("Resistance", Dimension::RESISTANCE, RESISTANCE_UNITS);
        assert!(!LAZY.is_initialised());
        let first = LAZY.caches() as *const UnitCaches;
        assert!(LAZY.is_initialised());
        assert_eq!(first, LAZY.caches() as *const UnitCaches);
    }

    #[test]
    fn test_seeded_symbol_sets() {
        let caches = FRESH_FORCE.caches();
        let newton = FRESH_FORCE.si_unit();

        let base = SymbolSet::parse("kg⋅m⋅s⁻²").unwrap();
        assert_eq!(caches.sets.try_get_value(&base), Some(newton));
        assert_eq!(caches.sets.try_get_set(&newton), SymbolSet::parse("N"));
        assert_eq!(caches.symbols.try_get("newtons"), Some(newton));
    }

    #[test]
    fn test_stats_snapshot() {
        let stats = CacheStats::new();
        stats.fast_path_hit();
        stats.format_miss();
        stats.format_miss();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.fast_path_hits, 1);
        assert_eq!(snapshot.format_misses, 2);
        assert_eq!(snapshot.tokenizer_runs, 0);
    }
}
