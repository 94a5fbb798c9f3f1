//! Turn invariant: the player to move follows from the move count.

use super::{GameView, Invariant};
use crate::{Outcome, Player};

/// Invariant: players alternate, starting with player one.
///
/// While the game runs, player one is to move exactly when an even number of
/// moves has been made. A won game keeps the winner as current player, and
/// the winner made the last move.
pub struct TurnParity;

impl<'a> Invariant<GameView<'a>> for TurnParity {
    fn holds(view: &GameView<'a>) -> bool {
        let state = view.state();
        let moves = state.history().len();
        let last_mover = if moves % 2 == 1 {
            Player::PlayerOne
        } else {
            Player::PlayerTwo
        };

        match state.outcome() {
            Outcome::InProgress => state.current_player() == last_mover.opponent(),
            Outcome::Win(winner) => {
                moves > 0 && winner == last_mover && state.current_player() == winner
            }
            Outcome::Draw => moves > 0 && state.current_player() == last_mover,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}
