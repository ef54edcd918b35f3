//! Noughts - tic-tac-toe against a minimax opponent.
//!
//! Plays interactively in the terminal, analyzes positions, and runs
//! headless simulations.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod config;
mod simulate;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { overrides } => {
            let config = load_config(&cli.config)?.apply(&overrides);
            tui::run_tui(config).await
        }
        Command::Analyze {
            board,
            to_move,
            json,
        } => {
            init_stderr_logging();
            analyze::run(&board, to_move, json)
        }
        Command::Simulate { games, overrides } => {
            init_stderr_logging();
            let config = load_config(&cli.config)?.apply(&overrides);
            info!(games, "Starting simulation");
            simulate::run(&config, games)
        }
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    GameConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Logs to stderr so stdout stays clean for command output.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,noughts=debug,noughts_engine=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
