//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use super::win::{WIN_LINES, line_cells};
use tracing::instrument;

/// Checks if the board is full (no empty cells).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_indices().is_empty()
}

/// A line is open while it does not hold both an X and an O.
pub fn is_line_open(board: &Board, line: [usize; 3]) -> bool {
    let cells = line_cells(board, line);
    let has = |mark| cells.contains(&Cell::Occupied(mark));
    !(has(Mark::X) && has(Mark::O))
}

/// Checks whether every line is blocked, so nobody can ever win.
///
/// This can become true with empty cells left, which is why it is checked
/// after every move rather than only on a full board.
#[instrument(skip(board))]
pub fn is_draw_forced(board: &Board) -> bool {
    !WIN_LINES.iter().any(|&line| is_line_open(board, line))
}
