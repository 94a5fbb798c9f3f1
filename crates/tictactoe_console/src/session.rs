//! Interactive console session.
//!
//! Drives an [`Engine`] from line-based input: prints the board, prompts the
//! player to move, reports rejected moves, announces the verdict and offers a
//! rematch. Any `BufRead`/`Write` pair works, so tests script whole sessions.

use crate::input::{parse_move, parse_replay_answer};
use crate::messages::{self, INVALID_INPUT, OUT_OF_BOUNDS, POSITION_FILLED, REPLAY_PROMPT};
use anyhow::Result;
use derive_getters::Getters;
use serde::Serialize;
use std::io::{BufRead, Write};
use tictactoe_engine::{Engine, GameState, MoveClassification, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Tally of the games finished in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SessionSummary {
    /// Games that reached a verdict.
    games_played: u32,
    /// Games won by player one.
    wins_player_one: u32,
    /// Games won by player two.
    wins_player_two: u32,
    /// Drawn games.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Win(Player::PlayerOne) => self.wins_player_one += 1,
            Outcome::Win(Player::PlayerTwo) => self.wins_player_two += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// A console game session over arbitrary input and output streams.
#[derive(derive_new::new)]
pub struct ConsoleSession<R, W> {
    engine: Engine,
    padding: usize,
    input: R,
    output: W,
    #[new(default)]
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Plays games until the players decline a rematch or input ends.
    #[instrument(skip(self), fields(size = %self.engine.size()))]
    pub fn run(mut self) -> Result<SessionSummary> {
        info!("Starting console session");
        let mut state = self.engine.new_game();

        loop {
            let Some(outcome) = self.play_round(&mut state)? else {
                debug!("Input closed mid-game");
                break;
            };

            self.summary.record(outcome);
            self.announce(outcome)?;

            if !self.ask_replay()? {
                break;
            }
            state = self.engine.reset(state);
        }

        info!(summary = ?self.summary, "Session finished");
        Ok(self.summary)
    }

    /// Plays until the game ends. Returns `None` if input runs out first.
    #[instrument(skip_all)]
    fn play_round(&mut self, state: &mut GameState) -> Result<Option<Outcome>> {
        while !state.is_over() {
            self.print_board(state)?;

            let Some(index) = self.next_move(state.current_player())? else {
                return Ok(None);
            };

            let report = self.engine.apply_move(state, index)?;
            match report.classification() {
                MoveClassification::Accepted => {}
                MoveClassification::OutOfBounds => {
                    debug!(index, "Rejected out-of-bounds move");
                    writeln!(self.output, "{}", OUT_OF_BOUNDS)?;
                }
                MoveClassification::PositionFilled => {
                    debug!(index, "Rejected move on filled cell");
                    writeln!(self.output, "{}", POSITION_FILLED)?;
                }
            }
        }

        self.print_board(state)?;
        Ok(Some(state.outcome()))
    }

    /// Prompts until the player types something numeric.
    fn next_move(&mut self, player: Player) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(&messages::move_prompt(player))? else {
                return Ok(None);
            };

            if let Some(index) = parse_move(&line) {
                return Ok(Some(index));
            }

            warn!(input = %line.trim(), "Non-numeric move input");
            writeln!(self.output, "{}", INVALID_INPUT)?;
        }
    }

    fn ask_replay(&mut self) -> Result<bool> {
        let again = self
            .prompt(REPLAY_PROMPT)?
            .is_some_and(|answer| parse_replay_answer(&answer));
        debug!(again, "Replay answer");
        Ok(again)
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        if outcome.winner().is_some() {
            writeln!(self.output, "\n{}", outcome)?;
        } else {
            writeln!(self.output, "{}", outcome)?;
        }
        Ok(())
    }

    fn print_board(&mut self, state: &GameState) -> Result<()> {
        writeln!(self.output, "{}\n", state.board().render(self.padding))?;
        Ok(())
    }

    /// Writes `text` and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Applies `moves` to a fresh game, prints the board and the verdict.
///
/// # Errors
///
/// Fails if any move is rejected or follows a finished game.
#[instrument(skip(engine, output))]
pub fn write_replay(
    engine: &Engine,
    padding: usize,
    moves: &[i64],
    output: &mut impl Write,
) -> Result<Outcome> {
    let state = engine.replay(moves)?;

    writeln!(output, "{}\n", state.board().render(padding))?;
    match state.outcome() {
        Outcome::InProgress => writeln!(output, "Player {} to move", state.current_player())?,
        outcome => writeln!(output, "{}", outcome)?,
    }

    Ok(state.outcome())
}
