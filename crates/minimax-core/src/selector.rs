//! Move selection entry point
//!
//! Thin driver around [`Searcher`]: validates the depth budget, rejects
//! positions without a legal move, runs one full-window search with a fresh
//! transposition table and returns the recommended successor.

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::eval::{Evaluator, StaticEvaluator};
use crate::search::{Searcher, SearchStats};
use crate::state::GameState;
use crate::tt::TranspositionTable;
use crate::types::{Depth, Score, Side};

/// Result of one top-level search
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    /// Recommended successor of the root
    pub best: S,
    /// Minimax value of the root from the maximizing side's perspective
    pub score: Score,
    /// Depth budget the search ran with
    pub depth: Depth,
    pub stats: SearchStats,
}

/// Pick the best successor of `root` for `side` with the default settings
/// and a `depth` ply lookahead.
pub fn select_move<S: GameState>(root: &S, side: Side, depth: Depth) -> SearchResult<S> {
    MoveSelector::new(SearchConfig::full(depth))
        .select(root, side)
        .map(|outcome| outcome.best)
}

/// Configured move selector
#[derive(Debug, Clone)]
pub struct MoveSelector<E = StaticEvaluator> {
    config: SearchConfig,
    evaluator: E,
}

impl MoveSelector<StaticEvaluator> {
    /// Selector using each state's own evaluation
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, StaticEvaluator)
    }
}

impl<E> MoveSelector<E> {
    /// Selector with a custom leaf evaluator
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search `root` with a fresh transposition table.
    pub fn select<S>(&self, root: &S, side: Side) -> SearchResult<SearchOutcome<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut table = TranspositionTable::new();
        self.select_with_table(root, side, &mut table)
    }

    /// Search `root` reusing `table`.
    ///
    /// Entries left by earlier calls are trusted, so the table must only be
    /// shared between searches of the same game with the same evaluator.
    pub fn select_with_table<S>(
        &self,
        root: &S,
        side: Side,
        table: &mut TranspositionTable<S::Key, S>,
    ) -> SearchResult<SearchOutcome<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.run(self.config, root, side, table)
    }

    /// Search `root` with a fresh table and another depth budget, keeping
    /// the other settings.
    pub fn select_at_depth<S>(
        &self,
        root: &S,
        side: Side,
        depth: Depth,
    ) -> SearchResult<SearchOutcome<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut table = TranspositionTable::new();
        self.run(self.config.with_depth(depth), root, side, &mut table)
    }

    fn run<S>(
        &self,
        config: SearchConfig,
        root: &S,
        side: Side,
        table: &mut TranspositionTable<S::Key, S>,
    ) -> SearchResult<SearchOutcome<S>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        config.validate()?;
        if root.is_terminal(side) {
            return Err(SearchError::NoMovesAvailable);
        }

        let mut searcher = Searcher::new(config, &self.evaluator);
        let result = searcher.search_root(root, side, table)?;
        let stats = *searcher.stats();

        log::debug!(
            "search depth={} side={} score={} nodes={} cutoffs={} tt_hits={} tt_hit_permille={} elapsed={:?}",
            config.depth,
            side,
            result.score,
            stats.nodes,
            stats.cutoffs(),
            stats.tt_hits,
            table.hit_permille(),
            stats.elapsed
        );

        let best = result.best.ok_or(SearchError::NoMovesAvailable)?;
        Ok(SearchOutcome {
            best,
            score: result.score,
            depth: config.depth,
            stats,
        })
    }
}
