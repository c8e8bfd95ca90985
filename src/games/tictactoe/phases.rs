//! Session phases and match outcomes.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a match, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and a win is still possible.
    InProgress,
    /// The mark completed a line.
    Win(Mark),
    /// Board full, or no line can be completed any more.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns true if the match ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the match is over.
    pub fn is_concluded(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a [`GameSession`](super::GameSession) sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Waiting for a mode and two identities.
    #[display("selecting mode")]
    SelectingMode,
    /// Waiting for the mark-order choice.
    #[display("assigning marks")]
    AssigningMarks,
    /// Accepting moves.
    #[display("in progress")]
    InProgress,
    /// Match over with the given outcome.
    #[display("concluded ({})", _0)]
    Concluded(Outcome),
}
