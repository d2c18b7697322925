//! Contract checks for [`GameState`] implementations
//!
//! The search trusts its games: a non-deterministic `expand` or an
//! inconsistent `canonical_key` silently produces wrong moves. These checks
//! are meant for a game's test-suite, run over every state reachable within
//! a few plies.

use rustc_hash::FxHashMap;

use crate::state::{GameState, Successors};
use crate::types::{Depth, Side};

/// A broken promise of a [`GameState`] implementation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Two expansions of the same state disagree
    #[error("expand({side}) is not deterministic")]
    NondeterministicExpand { side: Side },

    /// Two calls of `canonical_key` disagree
    #[error("canonical_key is not stable")]
    UnstableKey,

    /// A clone has a different canonical key than the original
    #[error("canonical_key differs between a state and its clone")]
    CloneKeyMismatch,

    /// Two evaluations of the same state disagree
    #[error("evaluate({perspective}) is not deterministic")]
    NondeterministicEvaluate { perspective: Side },

    /// `evaluate(Max) != -evaluate(Min)`
    #[error("asymmetric evaluation: max={max}, min={min}")]
    AsymmetricScore { max: i32, min: i32 },

    /// Evaluation outside `[LOSS, WIN]`
    #[error("evaluation {raw} outside the sentinel range")]
    ScoreOutOfRange { raw: i32 },
}

/// Expanding twice yields the same successors in the same order.
pub fn check_expand_deterministic<S: GameState>(
    state: &S,
    side: Side,
) -> Result<(), ContractViolation> {
    let keys = |s: &S| {
        let mut out = Successors::new();
        s.expand(side, &mut out);
        out.iter().map(|c| c.canonical_key()).collect::<Vec<_>>()
    };
    if keys(state) != keys(state) {
        return Err(ContractViolation::NondeterministicExpand { side });
    }
    Ok(())
}

/// The canonical key is stable across calls and clones.
pub fn check_key_stable<S: GameState>(state: &S) -> Result<(), ContractViolation> {
    let key = state.canonical_key();
    if key != state.canonical_key() {
        return Err(ContractViolation::UnstableKey);
    }
    if key != state.clone().canonical_key() {
        return Err(ContractViolation::CloneKeyMismatch);
    }
    Ok(())
}

/// Evaluation is deterministic, inside the sentinel band and mirrored
/// between the two perspectives.
pub fn check_score_symmetry<S: GameState>(state: &S) -> Result<(), ContractViolation> {
    let max = state.evaluate(Side::Max);
    let min = state.evaluate(Side::Min);

    for (perspective, score) in [(Side::Max, max), (Side::Min, min)] {
        if state.evaluate(perspective) != score {
            return Err(ContractViolation::NondeterministicEvaluate { perspective });
        }
        if !score.is_valid_eval() {
            return Err(ContractViolation::ScoreOutOfRange { raw: score.raw() });
        }
    }
    if max != -min {
        return Err(ContractViolation::AsymmetricScore {
            max: max.raw(),
            min: min.raw(),
        });
    }
    Ok(())
}

/// Visit every distinct `(state, side to move)` reachable from `root` within
/// `depth` plies, root included. Each pair is visited once even when it is
/// reachable along several paths.
pub fn walk_states<S, F>(
    root: &S,
    side: Side,
    depth: Depth,
    mut f: F,
) -> Result<(), ContractViolation>
where
    S: GameState,
    F: FnMut(&S, Side) -> Result<(), ContractViolation>,
{
    // remaining depth each pair was expanded with
    let mut seen: FxHashMap<(S::Key, Side), Depth> = FxHashMap::default();
    let mut stack = vec![(root.clone(), side, depth)];
    while let Some((state, side, depth)) = stack.pop() {
        match seen.insert((state.canonical_key(), side), depth) {
            None => f(&state, side)?,
            Some(prev) if prev >= depth => {
                seen.insert((state.canonical_key(), side), prev);
                continue;
            }
            Some(_) => {}
        }
        if depth == 0 {
            continue;
        }
        let mut out = Successors::new();
        state.expand(side, &mut out);
        stack.extend(out.into_iter().map(|child| (child, !side, depth - 1)));
    }
    Ok(())
}

/// Run every check on each state reachable within `depth` plies.
///
/// Returns the number of distinct states checked.
pub fn check_all<S: GameState>(
    root: &S,
    side: Side,
    depth: Depth,
) -> Result<usize, ContractViolation> {
    let mut checked = 0;
    walk_states(root, side, depth, |state, side| {
        check_expand_deterministic(state, side)?;
        check_key_stable(state)?;
        check_score_symmetry(state)?;
        checked += 1;
        Ok(())
    })?;
    Ok(checked)
}
