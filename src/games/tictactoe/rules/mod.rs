//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so each can be tested on hand-built boards.

pub mod draw;
pub mod legality;
pub mod win;

pub use draw::{is_draw, is_full};
pub use legality::{InvalidMove, check_move, is_invalid_move};
pub use win::{is_victory, winner};

use super::{Board, GameResult, Mark};
use tracing::instrument;

/// Returns true once the board has a winning line or no free cell.
#[instrument]
pub fn is_game_over(board: &Board) -> bool {
    is_victory(board) || is_draw(board)
}

/// Decides how a finished game ended.
///
/// Call only once [`is_game_over`] holds, passing the mark that made the last
/// move: a winning line is credited to that mark, anything else is a draw.
#[instrument]
pub fn compute_result(board: &Board, last_mark: Mark) -> GameResult {
    if is_victory(board) {
        GameResult::Victory(last_mark)
    } else {
        GameResult::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Unmarked;

    #[test]
    fn test_fresh_board_not_over() {
        assert!(!is_game_over(&Board::new()));
    }

    #[test]
    fn test_unmarked_row_is_not_victory() {
        let board = Board::from_rows([[E; 3], [X, O, X], [O, X, O]]);
        assert!(!is_victory(&board));
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_full_board_with_line_is_victory() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_game_over(&board));
        assert_eq!(compute_result(&board, Mark::X), GameResult::Victory(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, O]]);
        assert!(is_game_over(&board));
        assert!(!is_victory(&board));
        assert_eq!(compute_result(&board, Mark::O), GameResult::Draw);
    }
}
