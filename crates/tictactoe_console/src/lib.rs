//! Console front-end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: board size and rendering options from TOML plus CLI overrides
//! - **Input**: raw line parsing into move indices and replay answers
//! - **Session**: the prompt loop that drives an [`Engine`](tictactoe_engine::Engine)
//!   over any `BufRead`/`Write` pair

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod messages;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use input::{parse_move, parse_replay_answer};
pub use session::{ConsoleSession, SessionSummary, write_replay};
