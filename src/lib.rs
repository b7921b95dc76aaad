//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Games**: pure board model, position resolver, turn tracker and rules
//! - **Session**: the game loop driving one game over line-based I/O
//! - **Terminal**: line reader/writer over stdin and stdout
//! - **Config**: presentation settings from an optional TOML file
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_cli::{GameConfig, GameLoop, GameResult, Mark, Terminal};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut terminal = Terminal::new("0\n3\n1\n4\n2\n".as_bytes(), Vec::new());
//! let summary = GameLoop::new(GameConfig::default()).run(&mut terminal)?;
//! assert_eq!(summary.result, GameResult::Victory(Mark::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Game loop
pub use session::{GameLoop, GameSummary, INVALID_POSITION_MESSAGE, PlayedMove};

// Crate-level exports - Terminal I/O
pub use terminal::{LineReader, LineWriter, Terminal, TerminalError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameResult, InvalidMove, Mark, Numbering, Position, Row, TurnTracker, UNMARKED,
    build_initial_board, check_move, compute_result, is_draw, is_game_over, is_invalid_move,
    is_marked_position, is_victory, parse_player_input, resolve_position, set_position, winner,
};
