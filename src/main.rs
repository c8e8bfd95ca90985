//! Tictactoe Duel - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_duel::{GameConfig, Orchestrator, PlayError, TerminalConsole};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(GameConfig::load_or_default(&cli.config)?);
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_game(&config),
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Run the interactive replay loop on the terminal
#[instrument(skip(config))]
fn run_game(config: &GameConfig) -> Result<()> {
    info!(?config, "Starting tictactoe_duel");
    let console = TerminalConsole::stdio(*config.color());
    let mut orchestrator = Orchestrator::new(console, config);

    match orchestrator.run() {
        Ok(outcomes) => {
            info!(matches = outcomes.len(), "Session finished");
            Ok(())
        }
        Err(PlayError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Game aborted");
            Err(e.into())
        }
    }
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
