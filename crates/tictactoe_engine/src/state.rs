//! Owned game state threaded through the engine.

use crate::types::{Board, BoardSize, Cell, Outcome, Player};
use serde::Serialize;

/// Complete game state.
///
/// Created by [`Engine::new_game`](crate::Engine::new_game) and mutated only
/// by [`Engine::apply_move`](crate::Engine::apply_move).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next (or the winner once won).
    current_player: Player,
    /// Game outcome.
    outcome: Outcome,
    /// Accepted cell indices, oldest first.
    history: Vec<usize>,
}

impl GameState {
    /// Initial configuration: empty board, player one to move.
    pub(crate) fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::PlayerOne,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the accepted move indices.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Places `player`'s mark (unchecked - the engine validates first).
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.board.set(index, Cell::Occupied(player));
        self.history.push(index);
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
