//! Core domain types for tic-tac-toe.

use crate::action::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board side length.
///
/// A 20x20 board rendered at the default padding is 79 columns wide, the
/// widest that fits a standard 80-column terminal.
pub const MAX_BOARD_SIZE: usize = 20;

/// Largest padding [`Board::render`] applies; wider requests are clamped.
pub const MAX_PADDING: usize = 8;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player, plays `X` and always opens.
    #[display("X")]
    PlayerOne,
    /// Second player, plays `O`.
    #[display("O")]
    PlayerTwo,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the character used when printing this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Validated side length of a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{}x{}", _0, _0)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates a side length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoardSize`] when `side` is outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    pub fn new(side: usize) -> Result<Self, EngineError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&side) {
            Ok(Self(side))
        } else {
            Err(EngineError::InvalidBoardSize(side))
        }
    }

    /// Side length N.
    pub fn side(self) -> usize {
        self.0
    }

    /// Number of cells, N².
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(MIN_BOARD_SIZE)
    }
}

/// Square tic-tac-toe board.
///
/// Cells are stored in row-major order; the length is always N².
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Indices currently holding `player`'s mark.
    pub fn occupied_by(&self, player: Player) -> BTreeSet<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Occupied(player))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of the empty cells, ascending.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Formats the board as rows of padded values joined by `|`, separated
    /// by a dashed divider. Padding is capped at [`MAX_PADDING`].
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn render(&self, padding: usize) -> String {
        let side = self.size.side();
        let padding = padding.min(MAX_PADDING);
        let pad = " ".repeat(padding);
        let divider = "-".repeat(side * (2 * padding + 1) + (side - 1));

        self.cells
            .chunks(side)
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{pad}{}{pad}", cell.symbol()))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{divider}\n"))
    }

    /// Sets the cell at `index`. Callers guarantee the index is in range.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(1))
    }
}

/// Current classification of the game.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    #[display("Game in progress")]
    InProgress,
    /// Game ended with the given player completing a line.
    #[display("Player {} has won the game!!", _0)]
    Win(Player),
    /// Board filled with no line completed.
    #[display("The game ended in a draw.")]
    Draw,
}

impl Outcome {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board3() -> Board {
        Board::new(BoardSize::new(3).unwrap())
    }

    #[test]
    fn test_board_size_bounds() {
        assert_eq!(BoardSize::new(2), Err(EngineError::InvalidBoardSize(2)));
        assert_eq!(BoardSize::new(21), Err(EngineError::InvalidBoardSize(21)));
        assert_eq!(BoardSize::new(20).unwrap().cell_count(), 400);
        assert_eq!(BoardSize::new(4).unwrap().cell_count(), 16);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board3();
        assert_eq!(board.cells().len(), 9);
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.valid_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_occupied_by_tracks_each_player() {
        let mut board = board3();
        board.set(0, Cell::Occupied(Player::PlayerOne));
        board.set(4, Cell::Occupied(Player::PlayerTwo));
        board.set(8, Cell::Occupied(Player::PlayerOne));

        assert_eq!(
            board.occupied_by(Player::PlayerOne),
            BTreeSet::from([0, 8])
        );
        assert_eq!(board.occupied_by(Player::PlayerTwo), BTreeSet::from([4]));
        assert!(!board.is_empty_at(4));
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_render_matches_console_layout() {
        let mut board = board3();
        board.set(0, Cell::Occupied(Player::PlayerOne));
        board.set(4, Cell::Occupied(Player::PlayerTwo));

        let expected = " X |   |   \n-----------\n   | O |   \n-----------\n   |   |   ";
        assert_eq!(board.render(1), expected);
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_render_without_padding() {
        let board = board3();
        assert_eq!(board.render(0), " | | \n-----\n | | \n-----\n | | ");
    }

    #[test]
    fn test_render_clamps_padding() {
        let board = board3();
        assert_eq!(board.render(usize::MAX), board.render(MAX_PADDING));

        let widest = Board::new(BoardSize::new(MAX_BOARD_SIZE).unwrap()).render(1);
        assert!(widest.lines().all(|line| line.len() < 80));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            Outcome::Win(Player::PlayerTwo).to_string(),
            "Player O has won the game!!"
        );
        assert_eq!(Outcome::Draw.to_string(), "The game ended in a draw.");
        assert!(!Outcome::InProgress.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::PlayerOne.opponent(), Player::PlayerTwo);
        assert_eq!(Player::PlayerTwo.opponent().opponent(), Player::PlayerTwo);
        assert_eq!(Player::PlayerOne.to_string(), "X");
    }
}
