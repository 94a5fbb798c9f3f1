//! The tic-tac-toe state machine.
//!
//! An [`Engine`] holds the immutable rule tables for one board size. Game
//! state lives outside it in a [`GameState`] the caller owns and passes back
//! in, so one engine can drive any number of independent games.

use crate::action::{EngineError, MoveClassification, MoveReport};
use crate::rules::WinningLines;
use crate::state::GameState;
use crate::types::{BoardSize, Outcome};
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, GameView, InvariantSet};

/// Rules engine for one board size.
#[derive(Debug, Clone)]
pub struct Engine {
    size: BoardSize,
    lines: WinningLines,
}

impl Engine {
    /// Creates an engine for an N×N board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] for unsupported sizes.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, EngineError> {
        let size = BoardSize::new(side)?;
        Ok(Self::with_size(size))
    }

    /// Creates an engine for an already validated size.
    pub fn with_size(size: BoardSize) -> Self {
        Self {
            size,
            lines: WinningLines::for_size(size),
        }
    }

    /// Returns the board size this engine plays.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the precomputed winning lines.
    pub fn lines(&self) -> &WinningLines {
        &self.lines
    }

    /// Creates a game in the initial configuration.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn new_game(&self) -> GameState {
        debug!("Starting new game");
        GameState::new(self.size)
    }

    /// Discards `previous` and returns a fresh game.
    #[instrument(skip_all, fields(size = %self.size))]
    pub fn reset(&self, previous: GameState) -> GameState {
        debug!(
            moves = previous.history().len(),
            outcome = %previous.outcome(),
            "Discarding game"
        );
        self.new_game()
    }

    /// Attempts to place the current player's mark at `index`.
    ///
    /// Out-of-range indices and occupied cells are reported through
    /// [`MoveClassification`] and leave `state` untouched. On acceptance the
    /// mover's lines are checked first, then the board for a draw; only a
    /// move that does neither passes the turn.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] if the game is already over.
    /// - [`EngineError::SizeMismatch`] if `state` belongs to another board size.
    /// - [`EngineError::InvariantViolation`] if a postcondition fails (debug
    ///   builds). `state` is restored to what it was before the call.
    #[instrument(skip(self, state), fields(player = %state.current_player()))]
    pub fn apply_move(&self, state: &mut GameState, index: i64) -> Result<MoveReport, EngineError> {
        let outcome = state.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Move attempted on a finished game");
            return Err(EngineError::InvalidState(outcome));
        }

        let state_size = state.board().size();
        if state_size != self.size {
            return Err(EngineError::SizeMismatch {
                engine: self.size,
                state: state_size,
            });
        }

        let Some(cell) = self.locate(index) else {
            debug!("Index out of bounds");
            return Ok(MoveReport::new(MoveClassification::OutOfBounds, outcome));
        };

        if !state.board().is_empty_at(cell) {
            debug!(cell, "Cell already filled");
            return Ok(MoveReport::new(MoveClassification::PositionFilled, outcome));
        }

        #[cfg(debug_assertions)]
        let before = state.clone();

        let mover = state.current_player();
        state.place(cell, mover);

        if self.lines.is_win_for(state.board(), mover) {
            state.set_outcome(Outcome::Win(mover));
            info!(winner = %mover, moves = state.history().len(), "Game won");
        } else if state.board().is_full() {
            state.set_outcome(Outcome::Draw);
            info!(moves = state.history().len(), "Game drawn");
        } else {
            state.pass_turn();
        }

        #[cfg(debug_assertions)]
        if let Err(err) = self.verify(state) {
            *state = before;
            return Err(err);
        }

        debug!(cell, outcome = %state.outcome(), "Move accepted");
        Ok(MoveReport::new(MoveClassification::Accepted, state.outcome()))
    }

    /// Plays `moves` from a fresh game and returns the resulting state.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RejectedMove`] at the first index that is not accepted.
    /// - [`EngineError::InvalidState`] if moves follow a finished game.
    #[instrument(skip(self))]
    pub fn replay(&self, moves: &[i64]) -> Result<GameState, EngineError> {
        let mut state = self.new_game();

        for &index in moves {
            let report = self.apply_move(&mut state, index)?;
            if !report.is_accepted() {
                return Err(EngineError::RejectedMove {
                    index,
                    classification: report.classification(),
                });
            }
        }

        Ok(state)
    }

    /// Converts a raw index into a cell position, rejecting negatives and
    /// anything at or past N².
    fn locate(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&cell| cell < self.size.cell_count())
    }

    #[cfg(debug_assertions)]
    fn verify(&self, state: &GameState) -> Result<(), EngineError> {
        GameInvariants::check_all(&GameView::new(state, &self.lines)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
