//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Character shown for a cell nobody has marked yet.
pub const UNMARKED: char = '-';

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Unmarked,
    /// Cell carries a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if a mark has been placed in this cell.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(_))
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Marked(mark) => Some(mark),
            Cell::Unmarked => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Unmarked => write!(f, "{}", UNMARKED),
            Cell::Marked(mark) => write!(f, "{}", mark),
        }
    }
}

/// A row of three cells.
pub type Row = [Cell; 3];

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain `Copy` value. Every update returns a new board and
/// leaves the one it was called on untouched, so a board handed out earlier
/// can always be re-read safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; 3],
}

impl Board {
    /// Creates a board with every cell unmarked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows, top to bottom.
    pub fn from_rows(rows: [Row; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[Row; 3] {
        &self.rows
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        self.rows[position.row()][position.column()]
    }

    /// Returns a copy of this board with `mark` placed at `position`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, position: Position, mark: Mark) -> Self {
        let mut next = *self;
        next.rows[position.row()][position.column()] = Cell::Marked(mark);
        next
    }

    /// Returns true if `position` already holds a mark.
    pub fn is_marked(&self, position: Position) -> bool {
        self.cell(position).is_marked()
    }

    /// Returns the board with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        let mut rows = [[Cell::Unmarked; 3]; 3];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                rows[j][i] = *cell;
            }
        }
        Self { rows }
    }

    /// Top-left to bottom-right diagonal.
    pub fn diagonal(&self) -> Row {
        [self.rows[0][0], self.rows[1][1], self.rows[2][2]]
    }

    /// Top-right to bottom-left diagonal.
    pub fn anti_diagonal(&self) -> Row {
        [self.rows[0][2], self.rows[1][1], self.rows[2][0]]
    }

    /// Renders one line of text per row, cells joined by `separator`.
    pub fn render_rows(&self, separator: &str) -> [String; 3] {
        self.rows.map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(separator)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_rows(" | ").join("\n"))
    }
}

/// Returns a board with every cell unmarked.
#[instrument]
pub fn build_initial_board() -> Board {
    Board::new()
}

/// Returns a new board identical to `board` except for `position`, which now holds `mark`.
pub fn set_position(board: &Board, position: Position, mark: Mark) -> Board {
    board.with_mark(position, mark)
}

/// Returns true if the cell at `position` is not unmarked.
pub fn is_marked_position(board: &Board, position: Position) -> bool {
    board.is_marked(position)
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The given mark completed a line.
    Victory(Mark),
    /// The board filled up without a line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Victory(mark) => Some(*mark),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Victory(mark) => write!(f, "Player {} won!", mark),
            GameResult::Draw => write!(f, "Draw!"),
        }
    }
}
