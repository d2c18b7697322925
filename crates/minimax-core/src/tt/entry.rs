//! Table entry

use crate::types::{Depth, Score};

/// How a stored score relates to the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The score is the minimax value
    Exact,
    /// The search stopped at a beta cutoff; the value is at least the score
    Lower,
    /// Every successor failed low; the value is at most the score
    Upper,
}

impl Bound {
    /// Classify a result searched with the window `(alpha, beta)`.
    #[inline]
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Bound {
        if score > beta {
            Bound::Lower
        } else if score < alpha {
            Bound::Upper
        } else {
            Bound::Exact
        }
    }
}

/// A memoized search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtEntry<S> {
    /// Best successor, `None` at leaves
    pub best: Option<S>,
    pub score: Score,
    pub bound: Bound,
    /// Remaining depth the entry was searched with
    pub depth: Depth,
}

impl<S> TtEntry<S> {
    pub fn new(best: Option<S>, score: Score, bound: Bound, depth: Depth) -> Self {
        Self {
            best,
            score,
            bound,
            depth,
        }
    }

    /// Whether this entry answers a query with the window `(alpha, beta)`
    /// without searching again.
    ///
    /// Exact entries always do. A lower bound only settles a node that would
    /// cut off anyway, an upper bound only one that fails low.
    #[inline]
    pub fn usable(&self, alpha: Score, beta: Score) -> bool {
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score > beta,
            Bound::Upper => self.score < alpha,
        }
    }

    /// Whether `self` carries at least as much information as `other`.
    #[inline]
    pub fn supersedes(&self, other: &TtEntry<S>) -> bool {
        if self.depth != other.depth {
            return self.depth > other.depth;
        }
        self.bound == Bound::Exact || other.bound != Bound::Exact
    }
}
