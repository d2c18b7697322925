//! Game state contract
//!
//! Every game searched by this crate implements [`GameState`]. The search is
//! written once against this trait and never changes per game.

use std::hash::Hash;

use smallvec::SmallVec;

use crate::types::{Score, Side};

/// Buffer filled by [`GameState::expand`].
///
/// Sixteen inline slots cover the branching factor of small board games
/// without touching the heap; larger games spill transparently.
pub type Successors<S> = SmallVec<[S; 16]>;

/// A position of a two-player, zero-sum, perfect-information game.
///
/// States are values: expansion derives new states from `self` and never
/// mutates it. Implementations must uphold:
///
/// - `expand` is deterministic and has no side effects; its order is part of
///   the observable behaviour because ties go to the first successor.
/// - `evaluate` is deterministic, returns [`Score::win_for`] the winner
///   (mirrored to `perspective`) for a completed game, and a value strictly
///   inside `(LOSS, WIN)` otherwise.
/// - `canonical_key` is equal for strategically identical positions,
///   regardless of the move order that produced them, and differs for
///   positions that differ in any game-relevant way.
///
/// The search cannot verify these; see [`crate::contract`] for checks a
/// game's test-suite should run.
pub trait GameState: Clone {
    /// Canonical encoding used as the transposition table key.
    type Key: Hash + Eq + Clone;

    /// Append every state reachable by one legal move of `side`.
    ///
    /// Leaving `out` empty marks a terminal position.
    fn expand(&self, side: Side, out: &mut Successors<Self>);

    /// Static estimate of the position from `perspective`, ignoring future
    /// moves.
    fn evaluate(&self, perspective: Side) -> Score;

    /// Canonical encoding of this position.
    fn canonical_key(&self) -> Self::Key;

    /// Convenience wrapper around [`GameState::expand`].
    fn successors(&self, side: Side) -> Vec<Self> {
        let mut out = Successors::new();
        self.expand(side, &mut out);
        out.into_vec()
    }

    /// `true` when `side` has no legal move here.
    fn is_terminal(&self, side: Side) -> bool {
        let mut out = Successors::new();
        self.expand(side, &mut out);
        out.is_empty()
    }
}
