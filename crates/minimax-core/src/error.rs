//! Error types for the search

use crate::types::{Depth, Score};

/// Search errors
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The root position has no legal successor for the side to move
    #[error("no moves available from the root position")]
    NoMovesAvailable,

    /// Depth budget outside `1..=max`
    #[error("invalid search depth {depth} (expected 1..={max})")]
    InvalidDepth { depth: Depth, max: Depth },

    /// The evaluator returned a score outside `[LOSS, WIN]`
    #[error("evaluator returned {raw}, outside the sentinel range")]
    EvaluationOutOfRange { raw: i32 },

    /// Configuration could not be parsed
    #[error(transparent)]
    Config(#[from] toml::de::Error),
}

impl SearchError {
    pub(crate) fn out_of_range(score: Score) -> Self {
        SearchError::EvaluationOutOfRange { raw: score.raw() }
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;
