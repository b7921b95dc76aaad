//! Board positions and the mapping from player input to them.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board, named by where it sits.
///
/// Positions are numbered 0-8 in row-major order (left to right, top to
/// bottom). Out-of-range coordinates are unrepresentable: callers that start
/// from raw input go through [`resolve_position`], which yields `None` for
/// anything off the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Zero-based row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, 0 at the left.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Position at a zero-based row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number the player types for the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numbering {
    /// Cells are numbered 0-8.
    #[default]
    Zero,
    /// Cells are numbered 1-9.
    One,
}

impl Numbering {
    /// Offset subtracted from player input to get a zero-based index.
    pub fn base(self) -> i64 {
        match self {
            Numbering::Zero => 0,
            Numbering::One => 1,
        }
    }

    /// Prompt shown before each move, naming the accepted range.
    pub fn prompt(self) -> String {
        let first = self.base();
        format!(
            "Choose your position ({}-{} left to right): ",
            first,
            first + 8
        )
    }
}

/// Maps a player-facing number to a board position.
///
/// Returns `None` when the number, once shifted by the numbering base,
/// falls outside 0-8.
#[instrument]
pub fn resolve_position(raw: i64, numbering: Numbering) -> Option<Position> {
    let index = raw.checked_sub(numbering.base())?;
    usize::try_from(index).ok().and_then(Position::from_index)
}

/// Parses the integer at the start of `text`.
///
/// Leading whitespace and a single sign are accepted, anything after the
/// digits is ignored. Text without leading digits yields `None`, as does a
/// number too large to be a position of any kind.
#[instrument]
pub fn parse_player_input(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
