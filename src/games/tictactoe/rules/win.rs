//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Row};
use tracing::instrument;

/// Returns the mark filling `line`, if all three cells hold the same mark.
///
/// A line of unmarked cells never counts.
fn line_owner(line: &Row) -> Option<Mark> {
    let first = line[0].mark()?;
    line.iter()
        .all(|cell| cell.mark() == Some(first))
        .then_some(first)
}

fn row_winner(board: &Board) -> Option<Mark> {
    board.rows().iter().find_map(line_owner)
}

fn column_winner(board: &Board) -> Option<Mark> {
    row_winner(&board.transpose())
}

fn diagonal_winner(board: &Board) -> Option<Mark> {
    line_owner(&board.diagonal()).or_else(|| line_owner(&board.anti_diagonal()))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if some row, column or diagonal holds three of
/// that mark, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    row_winner(board)
        .or_else(|| column_winner(board))
        .or_else(|| diagonal_winner(board))
}

/// Returns true if any row, column or diagonal holds three identical marks.
pub fn is_victory(board: &Board) -> bool {
    winner(board).is_some()
}
