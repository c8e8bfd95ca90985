//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state, so the
//! session, the computer player and tests can all call them freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw_forced, is_full, is_line_open};
pub use win::{WIN_LINES, has_won, winner};

use super::{Board, Mark, Outcome};
use tracing::instrument;

/// Evaluates the board right after `last_mover` played.
///
/// The win check comes first, so a move that completes a line on the last
/// empty cell is a win, not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Mark) -> Outcome {
    if has_won(board, last_mover) {
        Outcome::Win(last_mover)
    } else if is_full(board) || is_draw_forced(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X X O / O O X / X X X
        let mut board = Board::new();
        for i in [0, 1, 5, 6, 7, 8] {
            board.place(i, Mark::X).unwrap();
        }
        for i in [2, 3, 4] {
            board.place(i, Mark::O).unwrap();
        }
        assert_eq!(evaluate(&board, Mark::X), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_in_progress() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(evaluate(&board, Mark::X), Outcome::InProgress);
    }
}
