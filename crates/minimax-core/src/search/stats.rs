//! Search statistics
//!
//! Counters collected during one top-level search, used to compare pruning
//! and memoization settings.

use std::time::Duration;

use crate::types::Depth;

/// Search counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls of the recursive search
    pub nodes: u64,
    /// Evaluator calls (depth exhausted or terminal)
    pub leaves: u64,
    /// Cutoffs at maximizing nodes
    pub beta_cutoffs: u64,
    /// Cutoffs at minimizing nodes
    pub alpha_cutoffs: u64,
    /// Transposition table lookups
    pub tt_probes: u64,
    /// Lookups that returned a usable entry
    pub tt_hits: u64,
    /// Entries written
    pub tt_stores: u64,
    /// Deepest ply reached from the root
    pub max_ply: Depth,
    /// Wall-clock time of the search
    pub elapsed: Duration,
}

impl SearchStats {
    /// Total cutoffs on both sides
    #[inline]
    pub fn cutoffs(&self) -> u64 {
        self.beta_cutoffs + self.alpha_cutoffs
    }

    /// Accumulate another search's counters
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.beta_cutoffs += other.beta_cutoffs;
        self.alpha_cutoffs += other.alpha_cutoffs;
        self.tt_probes += other.tt_probes;
        self.tt_hits += other.tt_hits;
        self.tt_stores += other.tt_stores;
        self.max_ply = self.max_ply.max(other.max_ply);
        self.elapsed += other.elapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let mut a = SearchStats {
            nodes: 10,
            beta_cutoffs: 1,
            max_ply: 2,
            ..Default::default()
        };
        let b = SearchStats {
            nodes: 5,
            alpha_cutoffs: 2,
            max_ply: 4,
            elapsed: Duration::from_millis(3),
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.nodes, 15);
        assert_eq!(a.cutoffs(), 3);
        assert_eq!(a.max_ply, 4);
        assert_eq!(a.elapsed, Duration::from_millis(3));
    }
}
