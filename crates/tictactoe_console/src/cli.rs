//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Spaces on each side of a cell value, at most 8 (overrides the config file)
    #[arg(short, long)]
    pub padding: Option<usize>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, with a replay prompt after each game
    Play,

    /// Apply cell indices to a fresh game and print the result
    Replay {
        /// Cell indices in move order
        #[arg(required = true, allow_negative_numbers = true)]
        moves: Vec<i64>,
    },
}
