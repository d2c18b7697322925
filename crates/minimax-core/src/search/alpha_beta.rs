//! Minimax with alpha-beta pruning and transposition table
//!
//! Scores are always from the maximizing side's perspective: `Side::Max`
//! nodes keep a running maximum, `Side::Min` nodes a running minimum, and
//! the two recurse into each other one ply at a time.
//!
//! Every node result obeys, for the window `(alpha, beta)` it was searched
//! with:
//!
//! - `score < alpha`: the true value is at most `score`
//! - `score > beta`: the true value is at least `score`
//! - otherwise `score` is the true value
//!
//! which is what [`Bound::classify`] records and [`TtEntry::usable`] relies
//! on. At the root the window is `(-INFINITE, INFINITE)`, so the root score
//! is always exact and the best child is the first successor reaching it.

use std::time::Instant;

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::eval::Evaluator;
use crate::search::SearchStats;
use crate::state::{GameState, Successors};
use crate::tt::{Bound, TranspositionTable, TtEntry};
use crate::types::{Depth, Score, Side};

/// Result of searching one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeResult<S> {
    /// Best successor, `None` at leaves
    pub best: Option<S>,
    /// Value from the maximizing side's perspective
    pub score: Score,
}

/// Recursive search engine
///
/// Holds the configuration, the evaluator and the counters of one top-level
/// call. The transposition table is passed through the recursion explicitly
/// and is never stored here.
pub struct Searcher<'e, E> {
    config: SearchConfig,
    evaluator: &'e E,
    stats: SearchStats,
}

impl<'e, E> Searcher<'e, E> {
    /// Create a searcher for one top-level call
    pub fn new(config: SearchConfig, evaluator: &'e E) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `root` with `side` to move using the full window.
    ///
    /// `config.depth` must already be validated.
    pub fn search_root<S>(
        &mut self,
        root: &S,
        side: Side,
        table: &mut TranspositionTable<S::Key, S>,
    ) -> SearchResult<NodeResult<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let start = Instant::now();
        let depth = self.config.depth;
        let result = self.search(table, root, depth, side, -Score::INFINITE, Score::INFINITE, 0);
        self.stats.elapsed = start.elapsed();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn search<S>(
        &mut self,
        table: &mut TranspositionTable<S::Key, S>,
        state: &S,
        depth: Depth,
        side: Side,
        mut alpha: Score,
        mut beta: Score,
        ply: Depth,
    ) -> SearchResult<NodeResult<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        // Depth exhausted
        if depth == 0 {
            return self.leaf(state);
        }

        // Table lookup before expanding. The root is never answered from the
        // table: a stored best move may belong to a transposed position.
        let policy = self.config.tt_policy;
        let key = policy
            .is_enabled()
            .then(|| policy.key(state.canonical_key(), depth, side));
        if let Some(key) = &key
            && ply > 0
        {
            self.stats.tt_probes += 1;
            if let Some(entry) = table.get(key)
                && entry.usable(alpha, beta)
            {
                self.stats.tt_hits += 1;
                return Ok(NodeResult {
                    best: entry.best.clone(),
                    score: entry.score,
                });
            }
        }

        let mut children = Successors::new();
        state.expand(side, &mut children);

        // Terminal position
        if children.is_empty() {
            return self.leaf(state);
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let maximizing = side.is_max();
        let mut best: Option<S> = None;
        let mut best_score = if maximizing {
            -Score::INFINITE
        } else {
            Score::INFINITE
        };

        for child in children {
            let score = self
                .search(table, &child, depth - 1, !side, alpha, beta, ply + 1)?
                .score;

            if maximizing {
                // Strict comparison: ties keep the earlier successor
                if score > best_score {
                    best_score = score;
                    best = Some(child);
                }
                if self.config.pruning {
                    if score > beta {
                        self.stats.beta_cutoffs += 1;
                        break;
                    }
                    alpha = alpha.max(best_score);
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best = Some(child);
                }
                if self.config.pruning {
                    if score < alpha {
                        self.stats.alpha_cutoffs += 1;
                        break;
                    }
                    beta = beta.min(best_score);
                }
            }
        }

        if let Some(key) = key {
            let bound = Bound::classify(best_score, alpha_in, beta_in);
            if table.put(key, TtEntry::new(best.clone(), best_score, bound, depth)) {
                self.stats.tt_stores += 1;
            }
        }

        Ok(NodeResult {
            best,
            score: best_score,
        })
    }

    /// Evaluate a leaf from the maximizing side's perspective.
    fn leaf<S>(&mut self, state: &S) -> SearchResult<NodeResult<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.leaves += 1;
        let score = self.evaluator.evaluate(state, Side::Max);
        if !score.is_valid_eval() {
            log::warn!("evaluator contract violation: score {} outside [LOSS, WIN]", score.raw());
            return Err(SearchError::out_of_range(score));
        }
        Ok(NodeResult { best: None, score })
    }
}

#[cfg(test)]
#[path = "tests/alpha_beta.rs"]
mod tests;
