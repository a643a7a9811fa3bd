//! Sorted substring cache
//!
//! One sorted array of `(key, value)` entries published through `ArcSwap`.
//! Readers load the current snapshot and binary search it without locking.
//! Writers serialize on a mutex, copy the array with the new entry inserted
//! in place and publish it with a single store, so a reader only ever sees a
//! complete, sorted snapshot.

use crate::compare::{normalize_char, normalized_chars};
use arc_swap::ArcSwap;
use metron_core::{MetronError, MetronResult};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub key: String,
    /// `key` folded to chars, the sort order of the array
    folded: Box<[char]>,
    pub value: T,
}

impl<T> CacheEntry<T> {
    fn new(key: &str, value: T) -> Self {
        Self {
            key: key.to_string(),
            folded: normalized_chars(key).collect(),
            value,
        }
    }
}

/// Result of [`SortedCache::try_get_by_prefix`]
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixMatch<T> {
    /// The key as it was registered
    pub key: String,
    pub value: T,
    /// Bytes of the searched text covered by the key
    pub len: usize,
}

pub struct SortedCache<T> {
    entries: ArcSwap<Vec<CacheEntry<T>>>,
    writer: Mutex<()>,
}

impl<T: Clone + PartialEq> SortedCache<T> {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            writer: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// Registered keys in sort order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.load().iter().map(|e| e.key.clone()).collect()
    }

    pub fn try_get(&self, key: &str) -> Option<T> {
        let entries = self.entries.load();
        let folded: Vec<char> = normalized_chars(key).collect();
        entries
            .binary_search_by(|e| e.folded[..].cmp(&folded[..]))
            .ok()
            .map(|i| entries[i].value.clone())
    }

    /// Longest key that is a prefix of `text[pos..]`.
    ///
    /// Keys sharing the first `k` chars of the text form a contiguous block of
    /// the sorted array, and inside it the key of length exactly `k` (if any)
    /// sorts first. The block is narrowed one char at a time; every exact key
    /// met on the way is a match and the last one is the longest.
    pub fn try_get_by_prefix(&self, text: &str, pos: usize) -> Option<PrefixMatch<T>> {
        let rest = text.get(pos..)?;
        let entries = self.entries.load();

        let mut lo = 0;
        let mut hi = entries.len();
        let mut consumed = 0;
        let mut best: Option<(usize, usize)> = None;

        for (depth, c) in rest.chars().enumerate() {
            if depth > 0 && entries[lo].folded.len() == depth {
                best = Some((lo, consumed));
            }

            let c = normalize_char(c);
            let block = &entries[lo..hi];
            let start = block.partition_point(|e| char_at(e, depth).map_or(true, |k| k < c));
            let end = block.partition_point(|e| char_at(e, depth).map_or(true, |k| k <= c));
            if start == end {
                return best.map(|(i, len)| prefix_match(&entries[i], len));
            }

            hi = lo + end;
            lo += start;
            consumed += c_len(rest, consumed);
        }

        // text exhausted while keys were still candidates
        if lo < hi && entries[lo].folded.len() == rest.chars().count() {
            best = Some((lo, consumed));
        }
        best.map(|(i, len)| prefix_match(&entries[i], len))
    }

    /// Insert `key`, or do nothing when it is already there with an equal
    /// value. A different value is a [`MetronError::CacheConflict`].
    pub fn try_add(&self, key: &str, value: T) -> MetronResult<()> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.entries.load_full();
        let entry = CacheEntry::new(key, value);

        match current.binary_search_by(|e| e.folded.cmp(&entry.folded)) {
            Ok(i) if current[i].value == entry.value => Ok(()),
            Ok(_) => Err(MetronError::CacheConflict { key: key.to_string() }),
            Err(i) => {
                let mut next = Vec::with_capacity(current.len() + 1);
                next.extend_from_slice(&current[..i]);
                next.push(entry);
                next.extend_from_slice(&current[i..]);
                self.entries.store(Arc::new(next));
                debug!(key, size = current.len() + 1, "cache insert");
                Ok(())
            }
        }
    }

    /// [`try_add`](Self::try_add) for registrations that cannot legitimately
    /// conflict, such as seeding from static tables.
    ///
    /// # Panics
    ///
    /// Panics when `key` is already registered with a different value.
    pub fn add(&self, key: &str, value: T) {
        if let Err(err) = self.try_add(key, value) {
            panic!("{err}");
        }
    }

    /// Cached value for `key`, computing and publishing it on a miss. When two
    /// threads race on the same key the first published value wins.
    pub fn get_or_insert_with(&self, key: &str, make: impl FnOnce() -> T) -> T {
        if let Some(value) = self.try_get(key) {
            return value;
        }

        let value = make();
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.entries.load_full();
        let entry = CacheEntry::new(key, value.clone());

        match current.binary_search_by(|e| e.folded.cmp(&entry.folded)) {
            Ok(i) => current[i].value.clone(),
            Err(i) => {
                let mut next = (*current).clone();
                next.insert(i, entry);
                self.entries.store(Arc::new(next));
                debug!(key, size = current.len() + 1, "cache insert");
                value
            }
        }
    }
}

fn char_at<T>(entry: &CacheEntry<T>, depth: usize) -> Option<char> {
    entry.folded.get(depth).copied()
}

/// Byte length of the char starting `offset` bytes into `rest`.
fn c_len(rest: &str, offset: usize) -> usize {
    rest[offset..].chars().next().map_or(0, char::len_utf8)
}

fn prefix_match<T: Clone>(entry: &CacheEntry<T>, len: usize) -> PrefixMatch<T> {
    PrefixMatch {
        key: entry.key.clone(),
        value: entry.value.clone(),
        len,
    }
}

impl<T: Clone + PartialEq> Default for SortedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.load();
        f.debug_map()
            .entries(entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}
