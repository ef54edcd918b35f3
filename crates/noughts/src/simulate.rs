//! Headless matches between the computer and a random opponent.

use crate::config::GameConfig;
use anyhow::Result;
use noughts_engine::{MatchController, Outcome, SearchEngine, SearchMode, Turn};
use serde::Serialize;
use tracing::{info, instrument};

/// Tally of a simulated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games won by the computer.
    pub computer_wins: u32,
    /// Games won by the random opponent.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Plays `games` games, alternating the opening side.
///
/// The opponent sits in the human seat and moves uniformly at random.
#[instrument(skip(config), fields(mode = %config.search_mode()))]
pub fn simulate(config: &GameConfig, games: u32) -> Result<SimulationReport> {
    let mut controller = MatchController::new(config.match_settings(true))?;
    let mut opponent = match config.seed() {
        Some(seed) => SearchEngine::with_seed(SearchMode::Random, seed.wrapping_add(2)),
        None => SearchEngine::new(SearchMode::Random),
    };
    let opponent_mark = *controller.human().mark();

    // Start the tally from zero regardless of what the constructor played.
    controller.start_new_match(config.player_name(), config.computer_name())?;

    for game in 0..games {
        let first = if game % 2 == 0 {
            Turn::Human
        } else {
            Turn::Computer
        };
        controller.start_new_game_with(first)?;

        while controller.outcome() == Outcome::Ongoing {
            let coord = opponent.next_move(controller.board(), opponent_mark)?;
            controller.submit_human_move(coord)?;
        }
    }

    let report = SimulationReport {
        games: controller.games_played(),
        computer_wins: *controller.computer().score(),
        opponent_wins: *controller.human().score(),
        draws: controller.draws(),
    };
    info!(?report, "Simulation finished");
    Ok(report)
}

/// Runs the simulate command.
pub fn run(config: &GameConfig, games: u32) -> Result<()> {
    let report = simulate(config, games)?;
    println!(
        "{} games ({} vs random): {} won, {} lost, {} drawn",
        report.games,
        config.search_mode(),
        report.computer_wins,
        report.opponent_wins,
        report.draws
    );
    Ok(())
}
