//! History invariant: the board is exactly the replay of the move history.

use super::{GameView, Invariant};
use crate::{Board, Cell, Player};

/// Invariant: replaying the history reproduces the board.
///
/// Moves alternate from player one, no index repeats, and nothing on the
/// board is missing from the history. The filled count therefore always
/// equals the number of accepted moves.
pub struct HistoryMatchesBoard;

impl<'a> Invariant<GameView<'a>> for HistoryMatchesBoard {
    fn holds(view: &GameView<'a>) -> bool {
        let state = view.state();
        let mut reconstructed = Board::new(state.board().size());
        let mut player = Player::PlayerOne;

        for &index in state.history() {
            if !reconstructed.is_empty_at(index) {
                return false;
            }
            reconstructed.set(index, Cell::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
