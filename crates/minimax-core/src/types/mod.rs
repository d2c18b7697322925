//! Basic types shared by the search and the game implementations

mod score;
mod side;

pub use score::Score;
pub use side::Side;

/// Remaining search depth in plies
pub type Depth = u8;
