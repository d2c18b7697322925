//! Score
//!
//! Scores are always expressed from the maximizing side's point of view.
//! The band `[LOSS, WIN]` is reserved for evaluator output: the two ends are
//! the "already won" sentinels and everything strictly between them is a
//! finite heuristic estimate. `INFINITE` lies outside that band and is only
//! used as an initial search bound.

use serde::{Deserialize, Serialize};

use super::Side;

/// Score of a position.
///
/// Higher is better for [`Side::Max`]. Negation mirrors a score to the other
/// side's perspective and never overflows for any value in
/// `[-INFINITE, INFINITE]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Score(i32);

impl Score {
    /// Zero
    pub const ZERO: Score = Score(0);
    /// Draw
    pub const DRAW: Score = Score(0);
    /// Completed win for the maximizing side
    pub const WIN: Score = Score(30_000);
    /// Completed win for the minimizing side
    pub const LOSS: Score = Score(-30_000);
    /// Search bound, strictly more extreme than either sentinel.
    ///
    /// Running maxima start at `-INFINITE` so that even a `LOSS` child
    /// replaces the empty candidate.
    pub const INFINITE: Score = Score(30_001);

    /// Create from a raw value
    #[inline]
    pub const fn new(v: i32) -> Score {
        Score(v)
    }

    /// Sentinel for a completed win by `side`
    #[inline]
    pub const fn win_for(side: Side) -> Score {
        match side {
            Side::Max => Self::WIN,
            Side::Min => Self::LOSS,
        }
    }

    /// Raw value
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Completed win for the maximizing side
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 >= Self::WIN.0
    }

    /// Completed win for the minimizing side
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 <= Self::LOSS.0
    }

    /// Either sentinel
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// Strictly inside `(LOSS, WIN)`.
    #[inline]
    pub const fn is_heuristic(self) -> bool {
        self.0 > Self::LOSS.0 && self.0 < Self::WIN.0
    }

    /// Inside `[LOSS, WIN]`, i.e. a value an evaluator may legally return.
    #[inline]
    pub const fn is_valid_eval(self) -> bool {
        self.0 >= Self::LOSS.0 && self.0 <= Self::WIN.0
    }

    /// Mirror a maximizing-side score to `side`'s perspective.
    ///
    /// `score.for_side(Side::Max) == score` and
    /// `score.for_side(Side::Min) == -score`.
    #[inline]
    pub const fn for_side(self, side: Side) -> Score {
        Score(self.0 * side.sign())
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_win() {
            write!(f, "win")
        } else if self.is_loss() {
            write!(f, "loss")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl std::ops::Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score(-self.0)
    }
}
