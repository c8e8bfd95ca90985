//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// The eight index triples that win the game.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the cells of a line, in line order.
pub(crate) fn line_cells(board: &Board, line: [usize; 3]) -> [Cell; 3] {
    let cells = board.cells();
    line.map(|index| cells[index])
}

/// Checks whether `mark` owns a complete line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WIN_LINES.iter().any(|&line| {
        line_cells(board, line)
            .iter()
            .all(|cell| *cell == Cell::Occupied(mark))
    })
}

/// Returns the mark that owns a complete line, if any.
///
/// X is checked first; on boards reached by legal play at most one mark can
/// own a line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| has_won(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in x {
            board.place(i, Mark::X).unwrap();
        }
        for &i in o {
            board.place(i, Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let board = board_with(&line, &[]);
            assert!(has_won(&board, Mark::X), "line {:?}", line);
            assert!(!has_won(&board, Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[0, 1], &[2, 4, 6]);
        assert!(has_won(&board, Mark::O));
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[0, 1], &[2]);
        assert!(!has_won(&board, Mark::X));
    }

    #[test]
    fn test_uniform_iff_some_line_uniform_exhaustive() {
        // Every assignment of {Empty, X, O} to the 9 cells.
        for code in 0..3usize.pow(9) {
            let mut cells = [Cell::Empty; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => Cell::Empty,
                    1 => Cell::Occupied(Mark::X),
                    _ => Cell::Occupied(Mark::O),
                };
                rest /= 3;
            }
            let board = Board::from_cells(cells);
            for mark in [Mark::X, Mark::O] {
                let expected = WIN_LINES
                    .iter()
                    .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(mark)));
                assert_eq!(has_won(&board, mark), expected);
            }
        }
    }
}
