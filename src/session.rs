//! Game loop for one terminal session.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, GameResult, Mark, Position, TurnTracker, build_initial_board, check_move,
    compute_result, is_game_over, set_position,
};
use crate::terminal::{LineReader, LineWriter, TerminalError};
use tracing::{debug, info, instrument};

/// Message shown when an attempted move is rejected.
pub const INVALID_POSITION_MESSAGE: &str = "Please, choose a valid position.";

/// A move that made it onto the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    /// Mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// How the game ended.
    pub result: GameResult,
    /// Board at the end of the game.
    pub board: Board,
    /// Accepted moves, in order.
    pub moves: Vec<PlayedMove>,
    /// Number of rejected inputs.
    pub rejected: usize,
}

impl GameSummary {
    /// Mark that won, or `None` for a draw.
    pub fn winner(&self) -> Option<Mark> {
        self.result.winner()
    }
}

/// Where the loop is between two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    AwaitingInput,
    Validating(String),
    Applying(Position),
    CheckEnd(Mark),
    Terminal(GameResult),
}

/// Runs one game from an empty board to a result.
///
/// The loop owns the turn tracker, so marks are only handed out for moves
/// that pass validation.
#[derive(Debug)]
pub struct GameLoop {
    config: GameConfig,
    turns: TurnTracker,
    board: Board,
    moves: Vec<PlayedMove>,
    rejected: usize,
}

impl GameLoop {
    /// Creates a loop for a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let turns = TurnTracker::new(*config.first_mark());
        Self {
            config,
            turns,
            board: build_initial_board(),
            moves: Vec::new(),
            rejected: 0,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the game to completion.
    ///
    /// Invalid input is answered with [`INVALID_POSITION_MESSAGE`] and asked
    /// for again, with no limit. Only a terminal failure ends the loop early.
    #[instrument(skip_all)]
    pub fn run<T>(mut self, io: &mut T) -> Result<GameSummary, TerminalError>
    where
        T: LineReader + LineWriter + ?Sized,
    {
        info!(first_mark = %self.turns.peek_next(), "Starting game");
        let prompt = self.config.prompt();

        if *self.config.show_initial_board() {
            self.show_board(io)?;
        }

        let mut phase = Phase::AwaitingInput;
        loop {
            phase = match phase {
                Phase::AwaitingInput => {
                    io.write_line(&prompt)?;
                    Phase::Validating(io.read_line()?)
                }
                Phase::Validating(input) => {
                    match check_move(&self.board, &input, *self.config.numbering()) {
                        Ok(position) => Phase::Applying(position),
                        Err(reason) => {
                            debug!(%reason, "Rejected move");
                            self.rejected += 1;
                            io.write_line(INVALID_POSITION_MESSAGE)?;
                            Phase::AwaitingInput
                        }
                    }
                }
                Phase::Applying(position) => {
                    let mark = self.turns.next_mark();
                    self.board = set_position(&self.board, position, mark);
                    self.moves.push(PlayedMove { mark, position });
                    debug!(%mark, %position, "Move applied");
                    self.show_board(io)?;
                    Phase::CheckEnd(mark)
                }
                Phase::CheckEnd(last_mark) => {
                    if is_game_over(&self.board) {
                        Phase::Terminal(compute_result(&self.board, last_mark))
                    } else {
                        Phase::AwaitingInput
                    }
                }
                Phase::Terminal(result) => {
                    io.write_line(&result.to_string())?;
                    info!(%result, moves = self.moves.len(), rejected = self.rejected, "Game finished");
                    return Ok(GameSummary {
                        result,
                        board: self.board,
                        moves: self.moves,
                        rejected: self.rejected,
                    });
                }
            };
        }
    }

    fn show_board<W: LineWriter + ?Sized>(&self, writer: &mut W) -> Result<(), TerminalError> {
        for row in self.board.render_rows(self.config.separator()) {
            writer.write_line(&row)?;
        }
        Ok(())
    }
}
