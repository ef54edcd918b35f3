//! Stateless UI rendering for a noughts match.

use super::app::App;
use noughts_engine::{BOARD_SIZE, Coordinate, Mark, MatchController, Turn};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str =
    "arrows move | Enter/Space place | 1-9 direct | n new game | m new match | t mode | q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Scoreboard
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app.controller());
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, controller: &MatchController) {
    let human = controller.human();
    let computer = controller.computer();
    let on_turn = |turn: Turn| {
        if !controller.outcome().is_terminal() && controller.turn() == turn {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        }
    };

    let players = Line::from(vec![
        Span::styled(
            format!("{} ({}): {}", human.name(), human.mark(), human.score()),
            on_turn(Turn::Human).fg(mark_color(*human.mark())),
        ),
        Span::raw("   vs   "),
        Span::styled(
            format!("{} ({}): {}", computer.name(), computer.mark(), computer.score()),
            on_turn(Turn::Computer).fg(mark_color(*computer.mark())),
        ),
    ]);
    let totals = Line::from(format!(
        "Games: {}  Draws: {}  Mode: {}",
        controller.games_played(),
        controller.draws(),
        controller.search_mode()
    ));

    let paragraph = Paragraph::new(vec![players, totals])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..BOARD_SIZE {
        draw_row(frame, rows[row * 2], app, row);
        if row + 1 < BOARD_SIZE {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, coord) in Coordinate::ALL[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]
        .iter()
        .enumerate()
    {
        draw_cell(frame, cols[col * 2], app, *coord);
        if col + 1 < BOARD_SIZE {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coordinate) {
    let controller = app.controller();
    let mark = controller.board().get(coord);
    let last = controller.game().last_move().map(|mv| mv.coordinate);

    let symbol = match mark {
        Mark::Empty => format!(" {} ", coord.index() + 1),
        Mark::X | Mark::O => format!(" {} ", mark),
    };
    let mut style = match mark {
        Mark::Empty => Style::default().fg(Color::DarkGray),
        _ => Style::default()
            .fg(mark_color(mark))
            .add_modifier(Modifier::BOLD),
    };
    if last == Some(coord) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if coord == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
        Mark::Empty => Color::DarkGray,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Overrides;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draw_renders_names_and_help() {
        let config = GameConfig::default().apply(&Overrides {
            name: Some("Ada".to_string()),
            seed: Some(9),
            ..Overrides::default()
        });
        let app = App::new(&config).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Ada (X): 0"));
        assert!(text.contains("Computer (O): 0"));
        assert!(text.contains("q quit"));
    }
}
