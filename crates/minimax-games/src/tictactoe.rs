//! Tic-tac-toe
//!
//! X plays for [`Side::Max`], O for [`Side::Min`]. Either may start: the
//! side to move is part of the state.
//!
//! Board notation: three rows of `X`, `O` or `.` separated by `/`, row-major
//! from the top-left cell, optionally followed by the side to move
//! (`x` or `o`). Without it X moves when both marks are equally many.
//!
//! ```text
//! OXO/.OO/.XX x
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, bail, ensure};
use minimax_core::{GameState, Score, Side, Successors};

/// Player mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[inline]
    pub const fn side(self) -> Side {
        match self {
            Mark::X => Side::Max,
            Mark::O => Side::Min,
        }
    }

    #[inline]
    pub const fn from_side(side: Side) -> Mark {
        match side {
            Side::Max => Mark::X,
            Side::Min => Mark::O,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Number of cells
pub const CELLS: usize = 9;

/// The eight winning lines
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Heuristic weight of a line holding `n` marks of one player and none of
/// the other.
const LINE_WEIGHT: [i32; 3] = [0, 1, 10];

/// Tic-tac-toe position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<Mark>; CELLS],
    to_move: Mark,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, X to move
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
            to_move: Mark::X,
        }
    }

    /// Empty board with `first` to move
    pub const fn starting_with(first: Mark) -> Self {
        Self {
            cells: [None; CELLS],
            to_move: first,
        }
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Option<Mark> {
        self.cells[idx]
    }

    #[inline]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.to_move.side()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&i| self.cells[i].is_none())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Owner of a completed line, if any
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&i| self.cells[i] == Some(first))
                .then_some(first)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Won or full
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Position after the side to move marks `idx`.
    pub fn play(&self, idx: usize) -> anyhow::Result<Self> {
        ensure!(idx < CELLS, "cell {idx} out of range");
        ensure!(!self.is_over(), "game is already over");
        ensure!(self.cells[idx].is_none(), "cell {idx} is occupied");
        Ok(self.place(idx, self.to_move))
    }

    /// Cell in which `next` differs from `self`, if exactly one was filled.
    pub fn move_to(&self, next: &TicTacToe) -> Option<usize> {
        let mut changed = (0..CELLS).filter(|&i| self.cells[i] != next.cells[i]);
        let idx = changed.next()?;
        (changed.next().is_none() && self.cells[idx].is_none()).then_some(idx)
    }

    fn place(&self, idx: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[idx] = Some(mark);
        Self {
            cells,
            to_move: mark.opponent(),
        }
    }

    /// Open-line heuristic from X's point of view.
    ///
    /// A line without O marks is worth 1 to X with one X and 10 with two;
    /// symmetric for O.
    fn heuristic(&self) -> i32 {
        LINES
            .iter()
            .map(|line| {
                let xs = line.iter().filter(|&&i| self.cells[i] == Some(Mark::X)).count();
                let os = line.iter().filter(|&&i| self.cells[i] == Some(Mark::O)).count();
                match (xs, os) {
                    (x, 0) if x < 3 => LINE_WEIGHT[x],
                    (0, o) if o < 3 => -LINE_WEIGHT[o],
                    _ => 0,
                }
            })
            .sum()
    }
}

impl GameState for TicTacToe {
    /// Base-3 cell packing, doubled, plus the side to move.
    type Key = u32;

    fn expand(&self, side: Side, out: &mut Successors<Self>) {
        if self.is_over() {
            return;
        }
        let mark = Mark::from_side(side);
        out.extend(self.empty_cells().map(|idx| self.place(idx, mark)));
    }

    fn evaluate(&self, perspective: Side) -> Score {
        let score = match self.winner() {
            Some(mark) => Score::win_for(mark.side()),
            None => Score::new(self.heuristic()),
        };
        score.for_side(perspective)
    }

    fn canonical_key(&self) -> u32 {
        let packed = self.cells.iter().fold(0u32, |acc, cell| {
            acc * 3
                + match cell {
                    None => 0,
                    Some(Mark::X) => 1,
                    Some(Mark::O) => 2,
                }
        });
        packed * 2 + self.to_move.side().index() as u32
    }
}

impl FromStr for TicTacToe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut parts = s.split_whitespace();
        let board = parts.next().context("empty board notation")?;
        let side = parts.next();
        ensure!(parts.next().is_none(), "trailing input in {s:?}");

        let rows: Vec<&str> = board.split('/').collect();
        ensure!(rows.len() == 3, "expected 3 rows, got {}", rows.len());

        let mut cells = [None; CELLS];
        for (r, row) in rows.iter().enumerate() {
            ensure!(row.chars().count() == 3, "row {} must have 3 cells: {row:?}", r + 1);
            for (c, ch) in row.chars().enumerate() {
                cells[r * 3 + c] = match ch {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    '.' => None,
                    other => bail!("invalid cell {other:?}"),
                };
            }
        }

        let pos = TicTacToe {
            cells,
            to_move: Mark::X,
        };
        let (xs, os) = (pos.count(Mark::X), pos.count(Mark::O));
        ensure!(xs.abs_diff(os) <= 1, "mark counts X={xs} O={os} are unreachable");

        let to_move = match side {
            Some("x" | "X") => Mark::X,
            Some("o" | "O") => Mark::O,
            Some(other) => bail!("invalid side to move {other:?}"),
            None if xs == os => Mark::X,
            None if xs > os => Mark::O,
            None => Mark::X,
        };
        Ok(TicTacToe { cells, to_move })
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..3 {
                let ch = self.cells[row * 3 + col].map_or('.', Mark::to_char);
                write!(f, "{ch}")?;
            }
        }
        let side = match self.to_move {
            Mark::X => 'x',
            Mark::O => 'o',
        };
        write!(f, " {side}")
    }
}
