//! Tictactoe - two players, one terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::PathBuf;
use strictly_tictactoe_cli::{CONFIG_ENV_VAR, GameConfig, GameLoop, Terminal};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();
    initialize_tracing();

    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let config = GameConfig::discover(explicit).context("Failed to load game configuration")?;

    run_game(config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());

    let summary = GameLoop::new(config)
        .run(&mut terminal)
        .context("Game ended before a result")?;

    info!(result = %summary.result, winner = ?summary.winner(), moves = summary.moves.len(), "Exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
