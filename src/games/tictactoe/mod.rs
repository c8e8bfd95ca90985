//! Tic-tac-toe engine: board, rules, computer heuristic and match lifecycle.

mod action;
mod phases;
mod position;
pub mod rules;
mod session;
mod setup;
mod strategy;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use session::{GameSession, SessionError};
pub use setup::{COMPUTER_NAME, GameMode, Identity, MarkOrder, PlayerKind, SelectionError, title_case};
pub use strategy::{BlockingSelector, PreconditionViolation, blocking_move};
pub use types::{Board, CELL_COUNT, Cell, Mark};
pub use typestate::{GameFinished, GameInProgress, Lineup, Roster};
