//! Side to move

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `Max` tries to raise the score, `Min` tries to lower it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Max = 0,
    Min = 1,
}

impl Side {
    /// The other side
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// `+1` for `Max`, `-1` for `Min`
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::Max => 1,
            Side::Min => -1,
        }
    }

    /// Index for per-side arrays
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn is_max(self) -> bool {
        matches!(self, Side::Max)
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Max => write!(f, "max"),
            Side::Min => write!(f, "min"),
        }
    }
}
