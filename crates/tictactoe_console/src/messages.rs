//! Text shown to the players.

use tictactoe_engine::Player;

pub(crate) const INVALID_INPUT: &str = "Wrong input. Please try again";
pub(crate) const OUT_OF_BOUNDS: &str = "Position out of bounds. Please try again.";
pub(crate) const POSITION_FILLED: &str = "Position already filled. Please try again.";
pub(crate) const REPLAY_PROMPT: &str = "Do you wish to play again? [y/N] ";

/// Prompt asking `player` for a cell index.
pub(crate) fn move_prompt(player: Player) -> String {
    format!("Player {}, please enter the index of your next move: ", player)
}
