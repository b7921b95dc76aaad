//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    !board
        .rows()
        .iter()
        .any(|row| row.contains(&Cell::Unmarked))
}

/// Returns true once no cell is left to play.
///
/// This does not look for a winning line. A full board that also has one is
/// still reported as a victory by [`is_game_over`](super::is_game_over) and
/// [`compute_result`](super::compute_result).
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
