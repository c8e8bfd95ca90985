//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_duel::{DEFAULT_CONFIG_FILE, GameConfig};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Console tic-tac-toe with a blocking computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Pause before the computer moves, in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Print X and O without color
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Seed for coin flips and the computer's random moves
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play interactively (default)
    Play,

    /// Print the resolved configuration as TOML
    ShowConfig,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(ms) = self.delay_ms {
            config = config.with_think_delay_ms(ms);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(filter) = &self.log_filter {
            config = config.with_log_filter(filter.clone());
        }
        config
    }
}
