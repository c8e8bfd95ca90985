//! Console front end: prompts, rendering, players and the replay loop.
//!
//! The engine never reads input or prints. Everything a person sees goes
//! through the [`Console`] trait, which keeps asking until it gets a valid
//! answer, so the engine only ever receives well-formed requests.

mod orchestrator;
mod players;
pub mod render;
mod terminal;

pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use terminal::TerminalConsole;

use crate::games::tictactoe::{
    Board, GameMode, Identity, Mark, MarkOrder, MoveError, Outcome, PreconditionViolation, Roster,
    SessionError,
};
use derive_more::{Display, Error, From};

/// Which name is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Seat {
    /// First of two humans.
    #[display("Player 1")]
    PlayerOne,
    /// Second of two humans.
    #[display("Player 2")]
    PlayerTwo,
    /// The only human, playing the computer.
    #[display("you")]
    Solo,
}

/// Presentation collaborator for a match.
///
/// `request_*` methods block until the person gives a valid answer.
pub trait Console {
    /// Prints the title.
    fn banner(&mut self) -> Result<(), PlayError>;

    /// Asks for Player vs Player or Player vs Computer.
    fn request_mode(&mut self) -> Result<GameMode, PlayError>;

    /// Asks for a human name. Empty and reserved names are refused.
    fn request_identity(&mut self, seat: Seat) -> Result<Identity, PlayError>;

    /// Asks who plays X.
    fn request_mark_assignment(&mut self) -> Result<MarkOrder, PlayError>;

    /// Reports who plays which mark.
    fn announce_marks(&mut self, roster: &Roster) -> Result<(), PlayError>;

    /// Draws the board.
    fn render(&mut self, board: &Board) -> Result<(), PlayError>;

    /// Asks a human for a cell and returns its 0-based index.
    ///
    /// Only returns indices of empty cells on `board`.
    fn request_move(&mut self, name: &str, mark: Mark, board: &Board) -> Result<usize, PlayError>;

    /// Tells the players the computer is about to move.
    fn computer_thinking(&mut self, name: &str, mark: Mark) -> Result<(), PlayError>;

    /// Reports the computer's chosen cell.
    fn computer_moved(&mut self, index: usize) -> Result<(), PlayError>;

    /// Reports the end of the match.
    fn announce(&mut self, outcome: Outcome, mover: &Identity) -> Result<(), PlayError>;

    /// Asks whether to play another match.
    fn ask_replay(&mut self) -> Result<bool, PlayError>;

    /// Says goodbye.
    fn farewell(&mut self) -> Result<(), PlayError>;
}

/// Error ending a run of matches.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input reached end of file.
    #[display("Input closed")]
    #[from(ignore)]
    InputClosed,

    /// The computer was asked to move with no empty cells.
    #[display("{}", _0)]
    Precondition(PreconditionViolation),

    /// The session rejected a transition.
    #[display("{}", _0)]
    Session(SessionError),

    /// The session rejected a move that the console had accepted.
    #[display("{}", _0)]
    Move(MoveError),
}
