//! Match setup choices: game mode, identities and mark order.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Name of the computer opponent. Humans may not use it.
pub const COMPUTER_NAME: &str = "Computer";

/// Who is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameMode {
    /// Two humans at the same keyboard.
    #[display("Player vs Player")]
    PlayerVsPlayer,
    /// A human against the blocking computer.
    #[display("Player vs Computer")]
    PlayerVsComputer,
}

impl FromStr for GameMode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(GameMode::PlayerVsPlayer),
            "2" => Ok(GameMode::PlayerVsComputer),
            other => Err(SelectionError::UnknownOption(other.to_string())),
        }
    }
}

/// Which identity receives X (and therefore moves first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MarkOrder {
    /// The first identity plays X.
    #[display("First")]
    FirstIsX,
    /// The second identity plays X.
    #[display("Second")]
    SecondIsX,
    /// A coin flip decides.
    #[display("Random")]
    Random,
}

impl MarkOrder {
    /// Resolves the choice to "does the first identity play X?".
    #[instrument(skip(rng))]
    pub fn first_is_x(self, rng: &mut fastrand::Rng) -> bool {
        match self {
            MarkOrder::FirstIsX => true,
            MarkOrder::SecondIsX => false,
            MarkOrder::Random => rng.bool(),
        }
    }
}

impl FromStr for MarkOrder {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MarkOrder::FirstIsX),
            "2" => Ok(MarkOrder::SecondIsX),
            "3" => Ok(MarkOrder::Random),
            other => Err(SelectionError::UnknownOption(other.to_string())),
        }
    }
}

/// Kind of participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from the keyboard.
    Human,
    /// Moves come from the blocking heuristic.
    Computer,
}

/// A named participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Identity {
    /// Display name.
    name: String,
    /// Human or computer.
    kind: PlayerKind,
}

impl Identity {
    /// Creates a human identity from raw input.
    ///
    /// The name is trimmed and title-cased. Empty names and the reserved
    /// computer name (in any case) are rejected.
    #[instrument]
    pub fn human(raw: &str) -> Result<Self, SelectionError> {
        let name = title_case(raw.trim());
        if name.is_empty() {
            return Err(SelectionError::EmptyName);
        }
        if name.eq_ignore_ascii_case(COMPUTER_NAME) {
            return Err(SelectionError::ReservedName(name));
        }
        Ok(Self {
            name,
            kind: PlayerKind::Human,
        })
    }

    /// The computer opponent.
    pub fn computer() -> Self {
        Self {
            name: COMPUTER_NAME.to_string(),
            kind: PlayerKind::Computer,
        }
    }

    /// True for the computer opponent.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// A word starts after any non-alphabetic character, so `o'neil` becomes
/// `O'Neil`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Malformed setup input. Recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SelectionError {
    /// Blank name.
    #[display("Please enter a name")]
    EmptyName,

    /// Name reserved for the computer.
    #[display("The name '{}' is reserved. Please select another name", _0)]
    ReservedName(#[error(not(source))] String),

    /// Menu answer outside the offered options.
    #[display("'{}' is not one of the options", _0)]
    UnknownOption(#[error(not(source))] String),

    /// Identities do not fit the chosen mode.
    #[display("{} needs {}", _0, mode_requirement(*_0))]
    LineupMismatch(#[error(not(source))] GameMode),
}

fn mode_requirement(mode: GameMode) -> &'static str {
    match mode {
        GameMode::PlayerVsPlayer => "two human players",
        GameMode::PlayerVsComputer => "a human first and the computer second",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_name_is_title_cased() {
        let id = Identity::human("  ada lovelace ").unwrap();
        assert_eq!(id.name(), "Ada Lovelace");
        assert_eq!(*id.kind(), PlayerKind::Human);
        assert_eq!(title_case("o'NEIL"), "O'Neil");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Identity::human("   "), Err(SelectionError::EmptyName));
    }

    #[test]
    fn test_reserved_name_rejected_any_case() {
        for raw in ["Computer", "computer", " COMPUTER "] {
            assert!(matches!(
                Identity::human(raw),
                Err(SelectionError::ReservedName(_))
            ));
        }
        assert!(Identity::human("Computers").is_ok());
    }

    #[test]
    fn test_menu_parsing() {
        assert_eq!("1".parse::<GameMode>(), Ok(GameMode::PlayerVsPlayer));
        assert_eq!(" 2 ".parse::<GameMode>(), Ok(GameMode::PlayerVsComputer));
        assert!("3".parse::<GameMode>().is_err());
        assert_eq!("3".parse::<MarkOrder>(), Ok(MarkOrder::Random));
        assert!("x".parse::<MarkOrder>().is_err());
    }

    #[test]
    fn test_fixed_orders_ignore_rng() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert!(MarkOrder::FirstIsX.first_is_x(&mut rng));
        assert!(!MarkOrder::SecondIsX.first_is_x(&mut rng));
    }
}
