//! Move legality: the single gate every attempted move passes through.

use super::super::position::{Numbering, Position, parse_player_input, resolve_position};
use super::super::Board;
use tracing::instrument;

/// Why an attempted move was turned away.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Input did not start with a number.
    #[display("Input {:?} is not a number", _0)]
    NotANumber(String),

    /// Number does not name a cell on the board.
    #[display("Position {} is off the board", _0)]
    OffBoard(i64),

    /// Cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for InvalidMove {}

/// Returns true if `position` cannot be played: it is off the board or already marked.
pub fn is_invalid_move(board: &Board, position: Option<Position>) -> bool {
    match position {
        None => true,
        Some(position) => board.is_marked(position),
    }
}

/// Turns a raw line of player input into a playable position.
///
/// Accepts exactly the inputs for which [`is_invalid_move`] is false after
/// parsing and resolving, and says why the rest were rejected.
#[instrument(skip(board))]
pub fn check_move(board: &Board, input: &str, numbering: Numbering) -> Result<Position, InvalidMove> {
    let raw = parse_player_input(input)
        .ok_or_else(|| InvalidMove::NotANumber(input.trim().to_string()))?;
    let position = resolve_position(raw, numbering).ok_or(InvalidMove::OffBoard(raw))?;

    if is_invalid_move(board, Some(position)) {
        return Err(InvalidMove::Occupied(position));
    }
    Ok(position)
}
