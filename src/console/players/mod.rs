//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use super::{Console, PlayError};
use crate::games::tictactoe::{Board, Mark};

/// Something that can pick a move.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the index (0-8) of an empty cell on `board`.
    fn get_move(
        &mut self,
        console: &mut dyn Console,
        board: &Board,
        mark: Mark,
    ) -> Result<usize, PlayError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
