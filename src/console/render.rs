//! Stateless text rendering for tic-tac-toe.

use crate::games::tictactoe::{Board, Cell, Mark};
use crossterm::style::Stylize;

const BORDER: &str = "+---+---+---+";

/// Glyph for `mark`, red for X and green for O when `color` is set.
pub fn glyph(mark: Mark, color: bool) -> String {
    match (mark, color) {
        (Mark::X, true) => mark.glyph().red().to_string(),
        (Mark::O, true) => mark.glyph().green().to_string(),
        (_, false) => mark.glyph().to_string(),
    }
}

/// Renders the board as a bordered 3x3 grid.
///
/// Empty cells show their 1-based position number.
pub fn grid(board: &Board, color: bool) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    for (row_index, cells) in board.cells().chunks(3).enumerate() {
        out.push('|');
        for (col, cell) in cells.iter().enumerate() {
            let label = match cell {
                Cell::Empty => (row_index * 3 + col + 1).to_string(),
                Cell::Occupied(mark) => glyph(*mark, color),
            };
            out.push_str(&format!(" {} |", label));
        }
        out.push('\n');
        out.push_str(BORDER);
        out.push('\n');
    }
    out
}

/// The game title.
pub fn banner(color: bool) -> String {
    let title = "TIC-TAC-TOE";
    if color {
        title.magenta().to_string()
    } else {
        title.to_string()
    }
}
