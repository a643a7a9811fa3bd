//! Bidirectional symbol-set map
//!
//! Resolves a tokenized expression to a value and a value back to the set it
//! was first registered with. Both directions live in one snapshot so a
//! reader never sees one side updated without the other.

use crate::symbol_set::SymbolSet;
use arc_swap::ArcSwap;
use metron_core::{MetronError, MetronResult};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Clone)]
struct Maps<T> {
    by_set: HashMap<SymbolSet, T>,
    by_value: HashMap<T, SymbolSet>,
}

pub struct SymbolSetMap<T> {
    maps: ArcSwap<Maps<T>>,
    writer: Mutex<()>,
}

impl<T: Clone + Eq + Hash> SymbolSetMap<T> {
    pub fn new() -> Self {
        Self {
            maps: ArcSwap::from_pointee(Maps {
                by_set: HashMap::new(),
                by_value: HashMap::new(),
            }),
            writer: Mutex::new(()),
        }
    }

    pub fn try_get_value(&self, set: &SymbolSet) -> Option<T> {
        self.maps.load().by_set.get(set).cloned()
    }

    /// The first set registered for `value`.
    pub fn try_get_set(&self, value: &T) -> Option<SymbolSet> {
        self.maps.load().by_value.get(value).cloned()
    }

    /// Number of distinct sets.
    pub fn len(&self) -> usize {
        self.maps.load().by_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.load().by_set.is_empty()
    }

    /// Register `set -> value`. Returns `Ok(false)` when the pair is already
    /// known. A set already mapped to a different value is a conflict; a
    /// value that already has a set keeps it.
    pub fn try_add(&self, set: SymbolSet, value: T) -> MetronResult<bool> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.maps.load_full();

        match current.by_set.get(&set) {
            Some(existing) if *existing == value => return Ok(false),
            Some(_) => {
                return Err(MetronError::CacheConflict { key: set.to_string() });
            }
            None => {}
        }

        let mut next = (*current).clone();
        next.by_value.entry(value.clone()).or_insert_with(|| set.clone());
        debug!(set = %set, "symbol set registered");
        next.by_set.insert(set, value);
        self.maps.store(Arc::new(next));
        Ok(true)
    }
}

impl<T: Clone + Eq + Hash> Default for SymbolSetMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
