//! Tic-tac-toe duel library - console tic-tac-toe with a blocking computer.
//!
//! # Architecture
//!
//! - **Engine** ([`GameSession`], [`Board`], [`rules`], [`BlockingSelector`]):
//!   board state, win and draw detection, the computer heuristic and the
//!   match lifecycle. No I/O.
//! - **Console** ([`Console`], [`TerminalConsole`], [`Orchestrator`]): prompts,
//!   rendering, pacing and the replay loop.
//! - **Config** ([`GameConfig`]): TOML settings merged with CLI flags.
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{BlockingSelector, Board, Mark};
//!
//! let mut board = Board::new();
//! board.place(0, Mark::X).unwrap();
//! board.place(1, Mark::X).unwrap();
//!
//! let mut computer = BlockingSelector::with_seed(7);
//! assert_eq!(computer.select_move(&board, Mark::O).unwrap(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Console front end
pub use console::{
    ComputerPlayer, Console, HumanPlayer, Orchestrator, PlayError, Player, Seat, TerminalConsole,
    render,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BlockingSelector, Board, CELL_COUNT, COMPUTER_NAME, Cell, GameFinished, GameInProgress,
    GameMode, GameSession, Identity, Lineup, Mark, MarkOrder, Move, MoveError, Outcome, Phase,
    PlayerKind, Position, PreconditionViolation, Roster, SelectionError, SessionError,
    blocking_move, rules, title_case,
};
