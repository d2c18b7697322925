//! Iterative deepening
//!
//! Runs the selector at depth 1, 2, ... up to the configured depth and keeps
//! the deepest completed result. The time budget is only checked between
//! iterations: an iteration that has started always finishes.

use std::time::{Duration, Instant};

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::eval::{Evaluator, StaticEvaluator};
use crate::search::SearchStats;
use crate::selector::{MoveSelector, SearchOutcome};
use crate::state::GameState;
use crate::types::{Depth, Score, Side};

/// Summary of one completed iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationInfo {
    pub depth: Depth,
    pub score: Score,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Info callback type
pub type InfoCallback = Box<dyn Fn(&IterationInfo)>;

/// Result of an iterative-deepening run
#[derive(Debug, Clone)]
pub struct DeepeningOutcome<S> {
    /// Outcome of the deepest completed iteration
    pub outcome: SearchOutcome<S>,
    /// One entry per completed iteration, shallowest first
    pub iterations: Vec<IterationInfo>,
    /// Counters summed over all iterations
    pub total: SearchStats,
}

/// Iterative-deepening driver
pub struct IterativeDeepening<E = StaticEvaluator> {
    selector: MoveSelector<E>,
    budget: Duration,
    info_callback: Option<InfoCallback>,
}

impl IterativeDeepening<StaticEvaluator> {
    /// Deepen up to `config.depth` while `budget` lasts.
    pub fn new(config: SearchConfig, budget: Duration) -> Self {
        Self::with_evaluator(config, StaticEvaluator, budget)
    }
}

impl<E> IterativeDeepening<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E, budget: Duration) -> Self {
        Self {
            selector: MoveSelector::with_evaluator(config, evaluator),
            budget,
            info_callback: None,
        }
    }

    /// Call `callback` after every completed iteration
    pub fn on_iteration(mut self, callback: impl Fn(&IterationInfo) + 'static) -> Self {
        self.info_callback = Some(Box::new(callback));
        self
    }

    /// Deepen from `root`.
    ///
    /// Errors from the first iteration (no legal move, invalid depth,
    /// evaluator violation) are returned; there is no partial result to fall
    /// back on.
    pub fn run<S>(&self, root: &S, side: Side) -> SearchResult<DeepeningOutcome<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let start = Instant::now();
        let max_depth = self.selector.config().depth;
        self.selector.config().validate()?;

        let mut iterations = Vec::with_capacity(max_depth as usize);
        let mut total = SearchStats::default();
        let mut last: Option<SearchOutcome<S>> = None;

        for depth in 1..=max_depth {
            let outcome = self.selector.select_at_depth(root, side, depth)?;

            let info = IterationInfo {
                depth,
                score: outcome.score,
                nodes: outcome.stats.nodes,
                elapsed: start.elapsed(),
            };
            log::trace!(
                "iteration depth={} score={} nodes={} elapsed={:?}",
                info.depth,
                info.score,
                info.nodes,
                info.elapsed
            );
            if let Some(callback) = &self.info_callback {
                callback(&info);
            }

            total.merge(&outcome.stats);
            iterations.push(info);
            let decisive = outcome.score.is_decisive();
            last = Some(outcome);

            // A proven win or loss does not change with more lookahead
            if decisive || start.elapsed() >= self.budget {
                break;
            }
        }

        let outcome = last.ok_or(SearchError::InvalidDepth {
            depth: max_depth,
            max: SearchConfig::MAX_DEPTH,
        })?;
        Ok(DeepeningOutcome {
            outcome,
            iterations,
            total,
        })
    }
}
