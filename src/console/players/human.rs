//! Human player that answers console prompts.

use super::Player;
use crate::console::{Console, PlayError};
use crate::games::tictactoe::{Board, Mark};

/// Human player using keyboard input.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn get_move(
        &mut self,
        console: &mut dyn Console,
        board: &Board,
        mark: Mark,
    ) -> Result<usize, PlayError> {
        console.request_move(&self.name, mark, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
