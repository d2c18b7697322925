//! Take-away (subtraction Nim)
//!
//! Players alternately remove between 1 and `max_take` tokens from one heap.
//! Whoever takes the last token wins. Heap order does not matter, so the
//! canonical key sorts the heaps and many move orders transpose into the
//! same key.

use std::fmt;

use minimax_core::{GameState, Score, Side, Successors};
use smallvec::SmallVec;

pub type Heaps = SmallVec<[u8; 4]>;

/// Magnitude of the non-terminal estimate
const ESTIMATE: i32 = 100;

/// Take-away position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TakeAway {
    heaps: Heaps,
    max_take: u8,
    to_move: Side,
}

impl TakeAway {
    /// Default removal limit
    pub const DEFAULT_MAX_TAKE: u8 = 3;

    /// New game on `heaps`, Max to move, at most 3 tokens per move.
    pub fn new(heaps: &[u8]) -> Self {
        Self::with_max_take(heaps, Self::DEFAULT_MAX_TAKE)
    }

    /// A limit of 0 is raised to 1.
    pub fn with_max_take(heaps: &[u8], max_take: u8) -> Self {
        Self {
            heaps: heaps.iter().copied().collect(),
            max_take: max_take.max(1),
            to_move: Side::Max,
        }
    }

    /// Same position with `side` to move
    pub fn with_side_to_move(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    pub fn heaps(&self) -> &[u8] {
        &self.heaps
    }

    pub fn max_take(&self) -> u8 {
        self.max_take
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn tokens(&self) -> u32 {
        self.heaps.iter().map(|&h| h as u32).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    /// Grundy value: xor of each heap modulo `max_take + 1`.
    ///
    /// The side to move wins with perfect play iff it is non-zero.
    pub fn grundy(&self) -> u8 {
        let period = self.max_take as u16 + 1;
        self.heaps
            .iter()
            .fold(0, |acc, &h| acc ^ (h as u16 % period) as u8)
    }

    /// Player who took the last token
    pub fn winner(&self) -> Option<Side> {
        self.is_empty().then_some(!self.to_move)
    }
}

impl GameState for TakeAway {
    /// Sorted heaps, removal limit and side to move
    type Key = (Heaps, u8, Side);

    fn expand(&self, side: Side, out: &mut Successors<Self>) {
        for (i, &heap) in self.heaps.iter().enumerate() {
            for take in 1..=heap.min(self.max_take) {
                let mut child = self.clone();
                child.heaps[i] = heap - take;
                child.to_move = !side;
                out.push(child);
            }
        }
    }

    fn evaluate(&self, perspective: Side) -> Score {
        let score = match self.winner() {
            Some(side) => Score::win_for(side),
            // Mid-game estimate from the Grundy value: does not change the
            // exact result of a deep enough search, only shallow ones.
            None if self.grundy() != 0 => Score::new(ESTIMATE * self.to_move.sign()),
            None => Score::new(-ESTIMATE * self.to_move.sign()),
        };
        score.for_side(perspective)
    }

    fn canonical_key(&self) -> Self::Key {
        let mut heaps = self.heaps.clone();
        heaps.sort_unstable();
        (heaps, self.max_take, self.to_move)
    }
}

impl fmt::Display for TakeAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, heap) in self.heaps.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{heap}")?;
        }
        write!(f, "] take<={} {}", self.max_take, self.to_move)
    }
}
