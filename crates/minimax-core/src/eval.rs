//! Leaf evaluation
//!
//! The search only asks for a score when the depth budget runs out or a
//! position has no successors. Interior values are always derived from
//! their children.

use crate::state::GameState;
use crate::types::{Score, Side};

/// Leaf evaluation function
pub trait Evaluator<S: GameState> {
    /// Score `state` from `perspective`.
    fn evaluate(&self, state: &S, perspective: Side) -> Score;
}

/// Evaluator that defers to [`GameState::evaluate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEvaluator;

impl<S: GameState> Evaluator<S> for StaticEvaluator {
    #[inline]
    fn evaluate(&self, state: &S, perspective: Side) -> Score {
        state.evaluate(perspective)
    }
}

/// Closures can be used directly as evaluators.
impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, Side) -> Score,
{
    #[inline]
    fn evaluate(&self, state: &S, perspective: Side) -> Score {
        self(state, perspective)
    }
}
