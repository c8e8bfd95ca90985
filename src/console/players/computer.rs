//! Computer player driven by the blocking heuristic.

use super::Player;
use crate::console::{Console, PlayError};
use crate::games::tictactoe::{BlockingSelector, Board, COMPUTER_NAME, Mark};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent with a fixed pause before each move.
///
/// The pause is pacing for the people watching; the choice itself is
/// made instantly by [`BlockingSelector`].
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    selector: BlockingSelector,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(selector: BlockingSelector, delay: Duration) -> Self {
        Self { selector, delay }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, console, board))]
    fn get_move(
        &mut self,
        console: &mut dyn Console,
        board: &Board,
        mark: Mark,
    ) -> Result<usize, PlayError> {
        console.computer_thinking(COMPUTER_NAME, mark)?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let index = self.selector.select_move(board, mark)?;
        debug!(index, "Computer chose");
        console.computer_moved(index)?;
        Ok(index)
    }

    fn name(&self) -> &str {
        COMPUTER_NAME
    }
}
