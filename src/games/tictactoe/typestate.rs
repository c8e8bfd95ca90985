//! Phase-specific typestate structs for a match.
//!
//! Each phase is its own type carrying only what that phase needs. A
//! [`Lineup`] has identities but no marks; a [`GameInProgress`] has marks
//! and a board; a [`GameFinished`] can only be reviewed.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::setup::{GameMode, Identity, MarkOrder, PlayerKind, SelectionError};
use super::{Board, Mark, Position, rules};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  AssigningMarks Phase
// ─────────────────────────────────────────────────────────────

/// Mode and identities chosen, marks not yet assigned.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Lineup {
    mode: GameMode,
    first: Identity,
    second: Identity,
}

impl Lineup {
    /// Validates that the identities fit the mode.
    ///
    /// Player vs Player takes two humans; Player vs Computer takes a human
    /// first and the computer second.
    #[instrument]
    pub fn new(mode: GameMode, first: Identity, second: Identity) -> Result<Self, SelectionError> {
        let fits = match mode {
            GameMode::PlayerVsPlayer => !first.is_computer() && !second.is_computer(),
            GameMode::PlayerVsComputer => !first.is_computer() && second.is_computer(),
        };
        if !fits {
            return Err(SelectionError::LineupMismatch(mode));
        }
        Ok(Self {
            mode,
            first,
            second,
        })
    }

    /// Fixes who plays X for the whole match and starts it.
    #[instrument(skip(self, rng))]
    pub fn assign(self, order: MarkOrder, rng: &mut fastrand::Rng) -> GameInProgress {
        let (x, o) = if order.first_is_x(rng) {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        };
        info!(x = %x, o = %o, "Marks assigned");
        GameInProgress {
            roster: Roster {
                mode: self.mode,
                x,
                o,
            },
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
        }
    }
}

/// Identities bound to each mark for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Roster {
    mode: GameMode,
    x: Identity,
    o: Identity,
}

impl Roster {
    /// The identity playing `mark`.
    pub fn identity(&self, mark: Mark) -> &Identity {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// The mark the computer plays, if it is in the match.
    pub fn computer_mark(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|mark| *self.identity(*mark).kind() == PlayerKind::Computer)
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress - accepts moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    roster: Roster,
    board: Board,
    to_move: Mark,
    history: Vec<Move>,
}

impl GameInProgress {
    /// Places the current mark at `index` and evaluates the board.
    ///
    /// On error nothing changes. When the result is still
    /// [`Outcome::InProgress`] the turn passes to the other mark.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let mover = self.to_move;
        self.board.place(index, mover)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.history.push(Move::new(mover, position));

        let outcome = rules::evaluate(&self.board, mover);
        if !outcome.is_concluded() {
            self.to_move = mover.opponent();
        }
        debug_assert!(self.board.is_balanced(), "Board balance violated");
        debug_assert_eq!(
            self.history.len(),
            9 - self.board.empty_indices().len(),
            "History out of step with board"
        );
        debug!(%outcome, turn = self.history.len(), "Move applied");
        Ok(outcome)
    }

    /// Concludes the match (consumes in-progress, returns finished).
    pub fn finish(self) -> GameFinished {
        GameFinished {
            roster: self.roster,
            board: self.board,
            history: self.history,
        }
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves made so far.
    pub fn turns(&self) -> usize {
        self.history.len()
    }
}

// ─────────────────────────────────────────────────────────────
//  Concluded Phase
// ─────────────────────────────────────────────────────────────

/// Match finished.
///
/// The outcome is recomputed from the board on request.
#[derive(Debug, Clone)]
pub struct GameFinished {
    roster: Roster,
    board: Board,
    history: Vec<Move>,
}

impl GameFinished {
    /// Returns the outcome: the winner, or a draw.
    pub fn outcome(&self) -> Outcome {
        match rules::winner(&self.board) {
            Some(mark) => Outcome::Win(mark),
            None => Outcome::Draw,
        }
    }

    /// The identity that made the final move.
    pub fn last_mover(&self) -> Option<&Identity> {
        self.history
            .last()
            .map(|last| self.roster.identity(last.mark))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
