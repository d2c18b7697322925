//! Shared helpers for the integration tests

#![allow(dead_code)] // not every test file uses every helper

use minimax_core::{MoveSelector, SearchConfig, SearchOutcome};
use minimax_games::TicTacToe;

/// Route `log` output through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a board, panicking on bad notation
pub fn board(notation: &str) -> TicTacToe {
    notation
        .parse()
        .unwrap_or_else(|e| panic!("bad board {notation:?}: {e}"))
}

/// Search a tic-tac-toe position for its side to move.
pub fn search(pos: &TicTacToe, config: SearchConfig) -> SearchOutcome<TicTacToe> {
    MoveSelector::new(config)
        .select(pos, pos.side_to_move())
        .unwrap_or_else(|e| panic!("search of {pos} failed: {e}"))
}

/// Cell the recommended move marks
pub fn chosen_cell(pos: &TicTacToe, outcome: &SearchOutcome<TicTacToe>) -> usize {
    pos.move_to(&outcome.best)
        .unwrap_or_else(|| panic!("{} is not a successor of {pos}", outcome.best))
}
