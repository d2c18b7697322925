//! Search
//!
//! - `alpha_beta`: recursive minimax with alpha-beta pruning and table lookups
//! - `deepening`: iterative deepening on top of the move selector
//! - `stats`: counters for one search

mod alpha_beta;
pub mod deepening;
mod stats;

pub use alpha_beta::{NodeResult, Searcher};
pub use deepening::{DeepeningOutcome, InfoCallback, IterationInfo, IterativeDeepening};
pub use stats::SearchStats;
