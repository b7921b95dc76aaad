//! Command-line interface for the tictactoe binary.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
///
/// Settings are read from the file named by `TICTACTOE_CONFIG`, or from
/// `tictactoe.toml` in the working directory. Set `RUST_LOG` for diagnostics
/// on stderr.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
