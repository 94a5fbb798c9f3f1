//! Outcome invariant: the recorded outcome agrees with the board.

use super::{GameView, Invariant};
use crate::Outcome;
use crate::rules::is_draw;

/// Invariant: the outcome is what the board says it is.
///
/// A win needs a completed line for the winner, a draw needs a full board
/// with no line, and a running game has neither.
pub struct OutcomeConsistent;

impl<'a> Invariant<GameView<'a>> for OutcomeConsistent {
    fn holds(view: &GameView<'a>) -> bool {
        let board = view.state().board();
        let lines = view.lines();

        match view.state().outcome() {
            Outcome::Win(winner) => lines.is_win_for(board, winner),
            Outcome::Draw => is_draw(board, lines),
            Outcome::InProgress => lines.winner(board).is_none() && !board.is_full(),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board"
    }
}
