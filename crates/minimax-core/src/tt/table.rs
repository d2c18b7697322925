//! TranspositionTable body
//!
//! - probe/store operations
//! - hit statistics

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::{TtEntry, TtKey};

/// Probe/store counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    /// Stores rejected because the existing entry carried more information
    pub rejected: u64,
}

/// Transposition table for a single search
///
/// No eviction: one bounded search visits a bounded number of distinct
/// keys. A table kept alive across calls grows without limit.
#[derive(Debug, Clone)]
pub struct TranspositionTable<K, S> {
    entries: FxHashMap<TtKey<K>, TtEntry<S>>,
    stats: TtStats,
}

impl<K: Hash + Eq, S> Default for TranspositionTable<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, S> TranspositionTable<K, S> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            stats: TtStats::default(),
        }
    }

    /// Look up an entry
    pub fn get(&mut self, key: &TtKey<K>) -> Option<&TtEntry<S>> {
        self.stats.probes += 1;
        let entry = self.entries.get(key);
        if entry.is_some() {
            self.stats.hits += 1;
        }
        entry
    }

    /// Store an entry.
    ///
    /// An existing entry is replaced only by one that supersedes it, so the
    /// table never trades information for worse information. Returns whether
    /// the entry was written.
    pub fn put(&mut self, key: TtKey<K>, entry: TtEntry<S>) -> bool {
        match self.entries.get_mut(&key) {
            Some(existing) if !entry.supersedes(existing) => {
                self.stats.rejected += 1;
                false
            }
            Some(existing) => {
                *existing = entry;
                self.stats.stores += 1;
                true
            }
            None => {
                self.entries.insert(key, entry);
                self.stats.stores += 1;
                true
            }
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TtStats::default();
    }

    pub fn stats(&self) -> TtStats {
        self.stats
    }

    /// Hit rate in permille (0 when never probed)
    pub fn hit_permille(&self) -> u32 {
        if self.stats.probes == 0 {
            0
        } else {
            (self.stats.hits * 1000 / self.stats.probes) as u32
        }
    }
}
