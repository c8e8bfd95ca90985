//! Computer move selection.
//!
//! A single-ply, purely reactive heuristic: block the opponent's immediate
//! win if there is one, otherwise play a random empty cell. It never looks
//! for its own winning move.

use super::rules::has_won;
use super::{Board, Mark};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// The computer was asked to move on a board with no empty cells.
///
/// This is a bug in the caller, not a recoverable condition.
#[derive(Debug, Clone, Display, Error)]
#[display("Precondition violated: {} at {}:{}", message, file, line)]
pub struct PreconditionViolation {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PreconditionViolation {
    /// Creates a new violation with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Returns the lowest empty index where `computer_mark`'s opponent would win
/// on their next move.
///
/// Each candidate is tried on a scratch copy; `board` is never touched.
#[instrument(skip(board))]
pub fn blocking_move(board: &Board, computer_mark: Mark) -> Option<usize> {
    let opponent = computer_mark.opponent();
    board.empty_indices().into_iter().find(|&index| {
        let mut scratch = board.clone();
        scratch.place(index, opponent).is_ok() && has_won(&scratch, opponent)
    })
}

/// Blocking-only computer opponent.
#[derive(Debug, Clone)]
pub struct BlockingSelector {
    rng: fastrand::Rng,
}

impl BlockingSelector {
    /// Creates a selector seeded from the system.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a selector whose random fallback is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Chooses the computer's next cell.
    #[instrument(skip(self, board))]
    pub fn select_move(
        &mut self,
        board: &Board,
        computer_mark: Mark,
    ) -> Result<usize, PreconditionViolation> {
        let empty = board.empty_indices();
        if empty.is_empty() {
            return Err(PreconditionViolation::new(
                "select_move called on a full board",
            ));
        }

        if let Some(index) = blocking_move(board, computer_mark) {
            debug!(index, "Blocking opponent line");
            return Ok(index);
        }

        let index = empty[self.rng.usize(..empty.len())];
        debug!(index, candidates = empty.len(), "No threat, picking at random");
        Ok(index)
    }
}

impl Default for BlockingSelector {
    fn default() -> Self {
        Self::new()
    }
}
