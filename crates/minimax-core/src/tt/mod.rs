//! Transposition table
//!
//! Memoizes search results by canonical position so that a position reached
//! through different move orders is searched once per top-level call.
//!
//! - `TtEntry`: best successor, score, bound and depth of one result
//! - `TtKey`: canonical encoding plus the search context it was computed in
//! - `TranspositionTable`: the table itself
//!
//! # Key context
//!
//! [`TtPolicy::DepthAndSide`] (the default) keys entries by the remaining
//! depth and the side to move as well as the canonical encoding, so a value
//! computed with a shallow lookahead is never returned for a deeper query.
//! [`TtPolicy::StateOnly`] keys by the encoding alone. It is only sound when
//! the leaf evaluation does not depend on depth and every path reaches a
//! given position with the same remaining depth and side to move (true for
//! tic-tac-toe, false for games where a position can be reached after
//! different numbers of plies).
//!
//! # Collisions
//!
//! The table compares full keys. With an exact structural encoding there are
//! no collisions. A game that uses a hash as its `Key` accepts that a
//! collision silently returns another position's result.

mod entry;
mod table;

pub use entry::{Bound, TtEntry};
pub use table::{TranspositionTable, TtStats};

use serde::{Deserialize, Serialize};

use crate::types::{Depth, Side};

/// Which search context participates in the table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtPolicy {
    /// No memoization
    Disabled,
    /// Canonical encoding only
    StateOnly,
    /// Canonical encoding, remaining depth and side to move
    #[default]
    DepthAndSide,
}

impl TtPolicy {
    #[inline]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, TtPolicy::Disabled)
    }

    /// Build the key for a node under this policy.
    #[inline]
    pub fn key<K>(self, canonical: K, depth: Depth, side: Side) -> TtKey<K> {
        match self {
            TtPolicy::DepthAndSide => TtKey {
                canonical,
                depth: Some(depth),
                side: Some(side),
            },
            TtPolicy::StateOnly | TtPolicy::Disabled => TtKey {
                canonical,
                depth: None,
                side: None,
            },
        }
    }
}

/// Table key: canonical encoding plus optional search context
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TtKey<K> {
    pub canonical: K,
    pub depth: Option<Depth>,
    pub side: Option<Side>,
}
