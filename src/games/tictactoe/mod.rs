//! Tic-tac-toe board, positions, turns and rules.

mod position;
pub mod rules;
mod turn;
mod types;

pub use position::{Numbering, Position, parse_player_input, resolve_position};
pub use rules::{
    InvalidMove, check_move, compute_result, is_draw, is_game_over, is_invalid_move, is_victory,
    winner,
};
pub use turn::TurnTracker;
pub use types::{
    Board, Cell, GameResult, Mark, Row, UNMARKED, build_initial_board, is_marked_position,
    set_position,
};
