//! Drives matches between two players through a [`Console`].

use super::players::{ComputerPlayer, HumanPlayer, Player};
use super::{Console, PlayError, Seat};
use crate::config::GameConfig;
use crate::games::tictactoe::{
    BlockingSelector, GameMode, GameSession, Identity, Mark, Outcome, Phase, SessionError,
};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Runs the setup → play → replay loop.
pub struct Orchestrator<C> {
    console: C,
    session: GameSession,
    rng: fastrand::Rng,
    think_delay: Duration,
}

impl<C: Console> Orchestrator<C> {
    /// Creates an orchestrator using `config` for pacing and seeding.
    pub fn new(console: C, config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => fastrand::Rng::with_seed(*seed),
            None => fastrand::Rng::new(),
        };
        Self {
            console,
            session: GameSession::new(),
            rng,
            think_delay: config.think_delay(),
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gives back the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays matches until the players decline a replay.
    ///
    /// Returns the outcomes of every match played, in order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Outcome>, PlayError> {
        info!("Starting game orchestration");
        self.console.banner()?;
        let mut outcomes = Vec::new();
        loop {
            outcomes.push(self.play_match()?);
            if !self.console.ask_replay()? {
                self.console.farewell()?;
                info!(matches = outcomes.len(), "Players left");
                return Ok(outcomes);
            }
            self.session.replay()?;
        }
    }

    /// Takes a fresh session through setup and one full match.
    #[instrument(skip(self))]
    pub fn play_match(&mut self) -> Result<Outcome, PlayError> {
        self.set_up()?;
        let roster = match self.session.roster() {
            Some(roster) => roster.clone(),
            None => {
                return Err(PlayError::Session(SessionError::WrongPhase {
                    action: "start a match",
                    actual: self.session.phase(),
                }));
            }
        };
        let mut player_x = self.player_for(roster.x());
        let mut player_o = self.player_for(roster.o());

        loop {
            let (Some(board), Some(mark)) = (self.session.board(), self.session.to_move()) else {
                break;
            };
            self.console.render(board)?;

            let player = match mark {
                Mark::X => &mut player_x,
                Mark::O => &mut player_o,
            };
            debug!(player = %player.name(), %mark, "Waiting for move");
            let board = board.clone();
            let index = player.get_move(&mut self.console, &board, mark)?;

            match self.session.apply_move(index) {
                Ok(Outcome::InProgress) => {}
                Ok(outcome) => {
                    if let Some(board) = self.session.board() {
                        self.console.render(board)?;
                    }
                    self.console.announce(outcome, roster.identity(mark))?;
                    return Ok(outcome);
                }
                Err(e) if e.is_invalid_move() => {
                    warn!(error = %e, index, "Move refused, asking again");
                }
                Err(e) => return Err(e.into()),
            }
        }

        match self.session.phase() {
            Phase::Concluded(outcome) => Ok(outcome),
            actual => Err(PlayError::Session(SessionError::WrongPhase {
                action: "finish a match",
                actual,
            })),
        }
    }

    fn set_up(&mut self) -> Result<(), PlayError> {
        let mode = self.console.request_mode()?;
        let (first, second) = match mode {
            GameMode::PlayerVsPlayer => (
                self.console.request_identity(Seat::PlayerOne)?,
                self.console.request_identity(Seat::PlayerTwo)?,
            ),
            GameMode::PlayerVsComputer => (
                self.console.request_identity(Seat::Solo)?,
                Identity::computer(),
            ),
        };
        self.session.select_mode(mode, first, second)?;

        let order = self.console.request_mark_assignment()?;
        self.session.assign_marks(order, &mut self.rng)?;
        if let Some(roster) = self.session.roster() {
            self.console.announce_marks(roster)?;
        }
        Ok(())
    }

    fn player_for(&mut self, identity: &Identity) -> Box<dyn Player> {
        if identity.is_computer() {
            let selector = BlockingSelector::with_seed(self.rng.u64(..));
            Box::new(ComputerPlayer::new(selector, self.think_delay))
        } else {
            Box::new(HumanPlayer::new(identity.name().clone()))
        }
    }
}
