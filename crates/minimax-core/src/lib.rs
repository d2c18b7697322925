//! Generic adversarial search
//!
//! Depth-limited minimax with alpha-beta pruning and transposition-table
//! memoization for any two-player, turn-based, zero-sum game with perfect
//! information. A game plugs in by implementing [`GameState`]; the search is
//! written once against that trait.
//!
//! - [`GameState`]: expansion, static evaluation and canonical encoding
//! - [`Evaluator`]: leaf scoring (defaults to [`GameState::evaluate`])
//! - [`TranspositionTable`]: per-search memoization keyed by canonical state
//! - [`Searcher`]: the recursive minimax / alpha-beta procedure
//! - [`select_move`] / [`MoveSelector`]: the entry point
//! - [`IterativeDeepening`]: repeated searches under a time budget
//!
//! Scores are always from the maximizing side's perspective. See [`Score`]
//! for the sentinel values.

pub mod config;
pub mod contract;
pub mod error;
pub mod eval;
pub mod search;
pub mod selector;
pub mod state;
pub mod tt;
pub mod types;

pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::{SearchError, SearchResult};
pub use eval::{Evaluator, StaticEvaluator};
pub use search::{IterativeDeepening, NodeResult, SearchStats, Searcher};
pub use selector::{MoveSelector, SearchOutcome, select_move};
pub use state::{GameState, Successors};
pub use tt::{TranspositionTable, TtPolicy};
pub use types::{Depth, Score, Side};
