//! Position analysis: minimax values for every legal move.

use anyhow::{Context, Result, bail};
use noughts_engine::{Board, CELL_COUNT, Coordinate, Mark, Outcome, SearchEngine};
use serde::Serialize;
use tracing::{debug, instrument};

/// Value of one candidate move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveValue {
    /// Row of the candidate.
    pub row: usize,
    /// Column of the candidate.
    pub col: usize,
    /// Minimax value for the side to move.
    pub value: i32,
}

/// Full analysis of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// The position as rendered by the board.
    pub board: String,
    /// Side to move.
    pub to_move: Mark,
    /// Current outcome.
    pub outcome: Outcome,
    /// Every legal move in row-major order.
    pub moves: Vec<MoveValue>,
    /// The move the optimal engine would play.
    pub best: Option<MoveValue>,
}

/// Parses a nine-character row-major board such as `X.O.X....`.
///
/// Whitespace and `/` separators are ignored.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board> {
    let symbols: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .collect();
    if symbols.len() != CELL_COUNT {
        bail!("Board must have {} cells, got {}", CELL_COUNT, symbols.len());
    }

    let mut cells = [Mark::Empty; CELL_COUNT];
    for (cell, symbol) in cells.iter_mut().zip(symbols) {
        *cell = symbol
            .to_string()
            .parse()
            .with_context(|| format!("Unknown cell symbol '{}'", symbol))?;
    }
    Ok(Board::from_cells(cells))
}

/// Side to move assuming X opened: X when counts are level.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Analyzes a position.
#[instrument]
pub fn analyze(text: &str, to_move: Option<Mark>) -> Result<AnalysisReport> {
    let board = parse_board(text)?;
    let to_move = to_move.unwrap_or_else(|| infer_to_move(&board));
    debug!(%to_move, outcome = ?board.outcome(), "Analyzing position");

    let moves: Vec<MoveValue> = if board.outcome().is_terminal() {
        Vec::new()
    } else {
        SearchEngine::evaluate_moves(&board, to_move)?
            .into_iter()
            .map(|(coord, value)| value_of(coord, value))
            .collect()
    };

    let mut best: Option<MoveValue> = None;
    for candidate in &moves {
        if best.as_ref().is_none_or(|b| candidate.value > b.value) {
            best = Some(candidate.clone());
        }
    }

    Ok(AnalysisReport {
        board: board.display(),
        to_move,
        outcome: board.outcome(),
        moves,
        best,
    })
}

fn value_of(coord: Coordinate, value: i32) -> MoveValue {
    MoveValue {
        row: coord.row(),
        col: coord.col(),
        value,
    }
}

/// Formats a report for the terminal.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = format!(
        "{}\n\nOutcome: {}\nTo move: {}\n",
        report.board, report.outcome, report.to_move
    );
    for mv in &report.moves {
        out.push_str(&format!("  ({}, {}) -> {:>3}\n", mv.row, mv.col, mv.value));
    }
    if let Some(best) = &report.best {
        out.push_str(&format!("Best: ({}, {}) value {}\n", best.row, best.col, best.value));
    }
    out
}

/// Runs the analyze command.
#[instrument]
pub fn run(board: &str, to_move: Option<Mark>, json: bool) -> Result<()> {
    let report = analyze(board, to_move)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
