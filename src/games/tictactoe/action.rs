//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The session records them in
//! order so a finished match can be reviewed.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is off the board", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell at the position is already occupied.
    #[display("{} is already taken", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// No match is in progress.
    #[display("No match is in progress")]
    NotInProgress,
}

impl MoveError {
    /// True for the recoverable "pick another cell" errors.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfRange(_) | MoveError::CellOccupied(_))
    }
}
