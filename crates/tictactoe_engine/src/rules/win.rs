//! Win detection for tic-tac-toe.

use crate::types::{Board, BoardSize, Player};
use tracing::{debug, instrument};

/// Every row, column and diagonal of a board, as cell indices.
///
/// Built once per board size. For a 3x3 board this is the classic set of
/// eight triples, rows first, then columns, then the two diagonals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLines {
    lines: Vec<Vec<usize>>,
}

impl WinningLines {
    /// Computes the winning lines for `size`.
    #[instrument]
    pub fn for_size(size: BoardSize) -> Self {
        let n = size.side();
        let mut lines = Vec::with_capacity(2 * n + 2);

        for row in 0..n {
            lines.push((0..n).map(|col| row * n + col).collect());
        }
        for col in 0..n {
            lines.push((0..n).map(|row| row * n + col).collect());
        }
        lines.push((0..n).map(|i| i * n + i).collect());
        lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

        debug!(count = lines.len(), "Winning lines computed");
        Self { lines }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the table has no lines. Never true for a supported size.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Checks whether `player` owns every cell of at least one line.
    ///
    /// A line counts only if each of its indices is among the cells the
    /// player occupies.
    #[instrument(skip(self, board))]
    pub fn is_win_for(&self, board: &Board, player: Player) -> bool {
        let occupied = board.occupied_by(player);
        self.lines
            .iter()
            .any(|line| line.iter().all(|index| occupied.contains(index)))
    }

    /// Returns the first player holding a complete line, if any.
    pub fn winner(&self, board: &Board) -> Option<Player> {
        <Player as strum::IntoEnumIterator>::iter().find(|p| self.is_win_for(board, *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn size(n: usize) -> BoardSize {
        BoardSize::new(n).unwrap()
    }

    fn board_with(n: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(size(n));
        for (index, player) in marks {
            board.set(*index, Cell::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_three_by_three_lines() {
        let lines = WinningLines::for_size(size(3));
        let expected: Vec<&[usize]> = vec![
            &[0, 1, 2],
            &[3, 4, 5],
            &[6, 7, 8],
            &[0, 3, 6],
            &[1, 4, 7],
            &[2, 5, 8],
            &[0, 4, 8],
            &[2, 4, 6],
        ];
        assert_eq!(lines.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_larger_board_line_count() {
        let lines = WinningLines::for_size(size(5));
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|line| line.len() == 5));
        assert!(lines.iter().any(|line| line == [4, 8, 12, 16, 20]));
    }

    #[test]
    fn test_no_winner_empty_board() {
        let lines = WinningLines::for_size(size(3));
        assert_eq!(lines.winner(&Board::new(size(3))), None);
    }

    #[test]
    fn test_winner_top_row() {
        let lines = WinningLines::for_size(size(3));
        let board = board_with(
            3,
            &[
                (0, Player::PlayerOne),
                (1, Player::PlayerOne),
                (2, Player::PlayerOne),
            ],
        );
        assert!(lines.is_win_for(&board, Player::PlayerOne));
        assert!(!lines.is_win_for(&board, Player::PlayerTwo));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let lines = WinningLines::for_size(size(3));
        let board = board_with(
            3,
            &[
                (2, Player::PlayerTwo),
                (4, Player::PlayerTwo),
                (6, Player::PlayerTwo),
            ],
        );
        assert_eq!(lines.winner(&board), Some(Player::PlayerTwo));
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        // Marks spread over several lines but none complete.
        let lines = WinningLines::for_size(size(3));
        let board = board_with(
            3,
            &[
                (0, Player::PlayerOne),
                (1, Player::PlayerOne),
                (5, Player::PlayerOne),
                (7, Player::PlayerOne),
            ],
        );
        assert!(!lines.is_win_for(&board, Player::PlayerOne));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let lines = WinningLines::for_size(size(3));
        let board = board_with(
            3,
            &[
                (0, Player::PlayerOne),
                (1, Player::PlayerTwo),
                (2, Player::PlayerOne),
            ],
        );
        assert_eq!(lines.winner(&board), None);
    }
}
