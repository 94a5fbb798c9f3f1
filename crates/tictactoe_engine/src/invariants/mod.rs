//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! The engine checks them after every accepted move in debug builds, and they
//! are testable on their own.

pub mod history_matches_board;
pub mod outcome_consistent;
pub mod turn_parity;

pub use history_matches_board::HistoryMatchesBoard;
pub use outcome_consistent::OutcomeConsistent;
pub use turn_parity::TurnParity;

use crate::{GameState, WinningLines};

/// A game state together with the winning lines it is judged against.
///
/// The lines come from the engine that owns the game, so checking a state
/// never rebuilds the rule tables.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    state: &'a GameState,
    lines: &'a WinningLines,
}

impl<'a> GameView<'a> {
    /// Pairs `state` with the engine's `lines`.
    pub fn new(state: &'a GameState, lines: &'a WinningLines) -> Self {
        Self { state, lines }
    }

    /// The state under inspection.
    pub fn state(&self) -> &'a GameState {
        self.state
    }

    /// The winning lines for the state's board size.
    pub fn lines(&self) -> &'a WinningLines {
        self.lines
    }
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Triples of invariants.
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// Pairs of invariants, for checking a subset of [`GameInvariants`].
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// All game-state invariants as a composable set, checked over a [`GameView`].
pub type GameInvariants = (HistoryMatchesBoard, TurnParity, OutcomeConsistent);
