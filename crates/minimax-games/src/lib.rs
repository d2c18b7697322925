//! Reference games for `minimax-core`
//!
//! - [`TicTacToe`]: the classic 3x3 game, X maximizes
//! - [`TakeAway`]: subtraction Nim, heavy on transpositions
//! - [`GameTree`]: explicit DAGs for hand-built and random test trees

pub mod take_away;
pub mod tictactoe;
pub mod tree;

pub use take_away::TakeAway;
pub use tictactoe::{Mark, TicTacToe};
pub use tree::{GameTree, NodeId, TreeNode, TreeShape, TreeState};
