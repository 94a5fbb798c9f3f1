//! Move results and engine errors.
//!
//! Rejected moves are ordinary results the host branches on. Only misuse
//! of the engine itself surfaces as an [`EngineError`].

use crate::types::{BoardSize, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Outcome};
use serde::{Deserialize, Serialize};

/// How the engine classified a requested move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum MoveClassification {
    /// The mark was placed.
    #[display("Accepted")]
    Accepted,
    /// The index is negative or past the last cell.
    #[display("Position out of bounds")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("Position already filled")]
    PositionFilled,
}

/// Result of a call to [`Engine::apply_move`](crate::Engine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    classification: MoveClassification,
    outcome: Outcome,
}

impl MoveReport {
    pub(crate) fn new(classification: MoveClassification, outcome: Outcome) -> Self {
        Self {
            classification,
            outcome,
        }
    }

    /// Whether the move was accepted or why it was rejected.
    pub fn classification(&self) -> MoveClassification {
        self.classification
    }

    /// Game outcome after the call.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        self.classification == MoveClassification::Accepted
    }
}

/// Errors raised by engine misuse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Requested board side length is unsupported.
    #[display(
        "Board size {} is outside the supported range {}..={}",
        _0,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    InvalidBoardSize(usize),

    /// A move was attempted after the game finished.
    #[display("Game is already over: {}", _0)]
    InvalidState(Outcome),

    /// The state was created for a board of a different size.
    #[display("Engine plays {} but the game state is {}", engine, state)]
    SizeMismatch {
        /// Size the engine was built for.
        engine: BoardSize,
        /// Size of the supplied state.
        state: BoardSize,
    },

    /// A replayed move was not accepted.
    #[display("Replay move {} was rejected: {}", index, classification)]
    RejectedMove {
        /// The offending index.
        index: i64,
        /// Why it was rejected.
        classification: MoveClassification,
    },

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
