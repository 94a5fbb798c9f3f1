//! Draw detection for tic-tac-toe.

use super::WinningLines;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw: full, with no completed line.
///
/// The win check runs first, so a full board whose last mark completed a
/// line is never a draw.
#[instrument(skip(board, lines))]
pub fn is_draw(board: &Board, lines: &WinningLines) -> bool {
    lines.winner(board).is_none() && board.is_full()
}
