//! Tic-tac-toe console
//!
//! Two players share one terminal and take turns entering cell indices.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Command, ConsoleConfig, ConsoleSession, write_replay};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config =
        ConsoleConfig::load_or_default(&cli.config)?.with_overrides(cli.size, cli.padding)?;
    info!(?config, "Configuration resolved");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Run the interactive game loop on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &ConsoleConfig) -> Result<()> {
    let engine = config.engine()?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let summary = ConsoleSession::new(engine, *config.padding(), stdin, stdout).run()?;
    info!(
        games = summary.games_played(),
        player_one = summary.wins_player_one(),
        player_two = summary.wins_player_two(),
        draws = summary.draws(),
        "Goodbye"
    );
    Ok(())
}

/// Replay a move list and print the resulting board
#[instrument(skip(config))]
fn run_replay(config: &ConsoleConfig, moves: &[i64]) -> Result<()> {
    let engine = config.engine()?;
    let outcome = write_replay(&engine, *config.padding(), moves, &mut io::stdout().lock())?;
    info!(%outcome, "Replay complete");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_console=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
