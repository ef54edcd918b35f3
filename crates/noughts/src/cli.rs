//! Command-line interface for noughts.

use clap::{Args, Parser, Subcommand};
use noughts_engine::{Mark, SearchMode};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Human player's name
    #[arg(long)]
    pub name: Option<String>,

    /// Computer player's name
    #[arg(long)]
    pub computer_name: Option<String>,

    /// Computer strategy (optimal or random)
    #[arg(long)]
    pub mode: Option<SearchMode>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match in the terminal
    Play {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print minimax values for every legal move of a position
    Analyze {
        /// Nine cells in row-major order using X, O and '.'
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(long)]
        to_move: Option<Mark>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Pit the computer against a random opponent
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        #[command(flatten)]
        overrides: Overrides,
    },
}
