//! Match lifecycle state machine.
//!
//! ```text
//! SelectingMode ──select_mode──▶ AssigningMarks ──assign_marks──▶ InProgress
//!       ▲                                                          │  ▲
//!       └──────────── replay ◀── Concluded(outcome) ◀── apply_move ┘  │
//!                                                    apply_move ──────┘
//! ```

use super::action::MoveError;
use super::phases::{Outcome, Phase};
use super::setup::{GameMode, Identity, MarkOrder, SelectionError};
use super::typestate::{GameFinished, GameInProgress, Lineup, Roster};
use super::{Board, Mark};
use derive_more::{Display, Error, From};
use tracing::{info, instrument, warn};

/// A transition was requested that the current phase does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// Wrong phase for the requested transition.
    #[display("Cannot {} while {}", action, actual)]
    #[from(ignore)]
    WrongPhase {
        /// The transition that was attempted.
        action: &'static str,
        /// The phase the session was in.
        actual: Phase,
    },

    /// Setup input rejected.
    #[display("Invalid selection: {}", _0)]
    Selection(SelectionError),
}

/// One player's view of a match, from mode selection to replay.
///
/// The session exclusively owns the board of the current match. Replaying
/// drops it, so a new match always starts from an independent board.
#[derive(Debug, Clone, Default)]
pub enum GameSession {
    /// Waiting for a mode and two identities.
    #[default]
    SelectingMode,
    /// Waiting for the mark order.
    AssigningMarks(Lineup),
    /// Moves being played.
    InProgress(GameInProgress),
    /// Match over.
    Concluded(GameFinished),
}

impl GameSession {
    /// Creates a session waiting for a mode.
    #[instrument]
    pub fn new() -> Self {
        Self::SelectingMode
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self {
            GameSession::SelectingMode => Phase::SelectingMode,
            GameSession::AssigningMarks(_) => Phase::AssigningMarks,
            GameSession::InProgress(_) => Phase::InProgress,
            GameSession::Concluded(game) => Phase::Concluded(game.outcome()),
        }
    }

    /// `SelectingMode → AssigningMarks`.
    #[instrument(skip(self))]
    pub fn select_mode(
        &mut self,
        mode: GameMode,
        first: Identity,
        second: Identity,
    ) -> Result<(), SessionError> {
        if !matches!(self, GameSession::SelectingMode) {
            return Err(self.wrong_phase("select a mode"));
        }
        let lineup = Lineup::new(mode, first, second)?;
        info!(%mode, "Mode selected");
        *self = GameSession::AssigningMarks(lineup);
        Ok(())
    }

    /// `AssigningMarks → InProgress`.
    #[instrument(skip(self, rng))]
    pub fn assign_marks(
        &mut self,
        order: MarkOrder,
        rng: &mut fastrand::Rng,
    ) -> Result<(), SessionError> {
        let lineup = match std::mem::take(self) {
            GameSession::AssigningMarks(lineup) => lineup,
            other => {
                *self = other;
                return Err(self.wrong_phase("assign marks"));
            }
        };
        *self = GameSession::InProgress(lineup.assign(order, rng));
        Ok(())
    }

    /// Applies a move for the mark to move.
    ///
    /// `InProgress → InProgress` while the match continues, otherwise
    /// `InProgress → Concluded`. An invalid move leaves the session as it was.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let GameSession::InProgress(game) = self else {
            warn!(phase = %self.phase(), "Move outside of a match");
            return Err(MoveError::NotInProgress);
        };
        let outcome = game.play(index)?;
        if outcome.is_concluded()
            && let GameSession::InProgress(game) = std::mem::take(self)
        {
            info!(%outcome, "Match concluded");
            *self = GameSession::Concluded(game.finish());
        }
        Ok(outcome)
    }

    /// `Concluded → SelectingMode`, discarding board and identities.
    #[instrument(skip(self))]
    pub fn replay(&mut self) -> Result<(), SessionError> {
        if !matches!(self, GameSession::Concluded(_)) {
            return Err(self.wrong_phase("replay"));
        }
        info!("Starting a new match");
        *self = GameSession::SelectingMode;
        Ok(())
    }

    /// Outcome derived from the board; `InProgress` before the match ends.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameSession::Concluded(game) => game.outcome(),
            _ => Outcome::InProgress,
        }
    }

    /// The board, once marks are assigned.
    pub fn board(&self) -> Option<&Board> {
        match self {
            GameSession::InProgress(game) => Some(game.board()),
            GameSession::Concluded(game) => Some(game.board()),
            _ => None,
        }
    }

    /// The roster, once marks are assigned.
    pub fn roster(&self) -> Option<&Roster> {
        match self {
            GameSession::InProgress(game) => Some(game.roster()),
            GameSession::Concluded(game) => Some(game.roster()),
            _ => None,
        }
    }

    /// The mark to move, while a match is in progress.
    pub fn to_move(&self) -> Option<Mark> {
        match self {
            GameSession::InProgress(game) => Some(game.to_move()),
            _ => None,
        }
    }

    /// The identity whose turn it is.
    pub fn current_mover(&self) -> Option<&Identity> {
        match self {
            GameSession::InProgress(game) => Some(game.roster().identity(game.to_move())),
            _ => None,
        }
    }

    /// Moves made in the current match.
    pub fn turns(&self) -> usize {
        match self {
            GameSession::InProgress(game) => game.turns(),
            GameSession::Concluded(game) => game.history().len(),
            _ => 0,
        }
    }

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        let actual = self.phase();
        warn!(action, %actual, "Transition rejected");
        SessionError::WrongPhase { action, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(order: MarkOrder) -> GameSession {
        let mut session = GameSession::new();
        session
            .select_mode(
                GameMode::PlayerVsComputer,
                Identity::human("ann").unwrap(),
                Identity::computer(),
            )
            .unwrap();
        let mut rng = fastrand::Rng::with_seed(5);
        session.assign_marks(order, &mut rng).unwrap();
        session
    }

    #[test]
    fn test_lifecycle_phases() {
        let mut session = GameSession::new();
        assert_eq!(session.phase(), Phase::SelectingMode);
        session
            .select_mode(
                GameMode::PlayerVsPlayer,
                Identity::human("ann").unwrap(),
                Identity::human("bob").unwrap(),
            )
            .unwrap();
        assert_eq!(session.phase(), Phase::AssigningMarks);
        assert!(session.board().is_none());

        let mut rng = fastrand::Rng::with_seed(5);
        session.assign_marks(MarkOrder::FirstIsX, &mut rng).unwrap();
        assert_eq!(session.roster().unwrap().x().name(), "Ann");
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.to_move(), Some(Mark::X));
    }

    #[test]
    fn test_wrong_phase_is_rejected_without_change() {
        let mut session = GameSession::new();
        let mut rng = fastrand::Rng::with_seed(5);
        assert!(matches!(
            session.assign_marks(MarkOrder::Random, &mut rng),
            Err(SessionError::WrongPhase { .. })
        ));
        assert_eq!(session.apply_move(0), Err(MoveError::NotInProgress));
        assert!(session.replay().is_err());
        assert_eq!(session.phase(), Phase::SelectingMode);
    }

    #[test]
    fn test_bad_lineup_stays_in_selecting_mode() {
        let mut session = GameSession::new();
        let result = session.select_mode(
            GameMode::PlayerVsComputer,
            Identity::human("ann").unwrap(),
            Identity::human("bob").unwrap(),
        );
        assert!(matches!(result, Err(SessionError::Selection(_))));
        assert_eq!(session.phase(), Phase::SelectingMode);
    }

    #[test]
    fn test_computer_mark_follows_order() {
        let session = started(MarkOrder::SecondIsX);
        assert_eq!(session.roster().unwrap().computer_mark(), Some(Mark::X));
        assert!(session.current_mover().unwrap().is_computer());
    }

    #[test]
    fn test_invalid_move_leaves_session_unchanged() {
        let mut session = started(MarkOrder::FirstIsX);
        session.apply_move(0).unwrap();
        let before = session.board().cloned();
        assert!(session.apply_move(0).unwrap_err().is_invalid_move());
        assert!(session.apply_move(9).unwrap_err().is_invalid_move());
        assert_eq!(session.board().cloned(), before);
        assert_eq!(session.to_move(), Some(Mark::O));
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_forced_draw_concludes_before_board_is_full() {
        let mut session = started(MarkOrder::FirstIsX);
        // X O X / X O O / O X _
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            let outcome = session.apply_move(index).unwrap();
            if session.turns() < 8 {
                assert_eq!(outcome, Outcome::InProgress);
            } else {
                assert_eq!(outcome, Outcome::Draw);
            }
        }
        assert_eq!(session.phase(), Phase::Concluded(Outcome::Draw));
        assert_eq!(session.board().unwrap().empty_indices(), vec![8]);
        assert_eq!(session.apply_move(8), Err(MoveError::NotInProgress));
    }
}
