//! Stateless UI rendering for the board.

use super::app::App;
use noughts_core::{CellSelector, Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns the area of each cell, in index
/// order, for mouse hit-testing.
pub fn draw<S: CellSelector>(frame: &mut Frame, app: &App<S>) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title_style = Style::default().fg(Color::Cyan).bold();
    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(title_style)
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], app);

    let moves = app.session().history().len();
    let status = Paragraph::new(format!("{}  (move {})", app.status_text(), moves))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("click / 1-9 / arrows+enter: play   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    areas
}

fn draw_board<S: CellSelector>(frame: &mut Frame, area: Rect, app: &App<S>) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let cell = cols[col * 2];
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, cell, app, pos);
                areas[pos.to_index()] = cell;
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    areas
}

fn draw_cell<S: CellSelector>(frame: &mut Frame, area: Rect, app: &App<S>, pos: Position) {
    let (symbol, mut style) = match app.mark_at(pos) {
        None => ("", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => ("X", Style::default().fg(Color::Blue).bold()),
        Some(Mark::O) => ("O", Style::default().fg(Color::Red).bold()),
    };

    if app.is_winning_cell(pos) {
        style = style.bg(Color::LightGreen).fg(Color::Black);
    } else if pos == app.cursor() && !app.session().status().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad vertically so the mark sits in the middle line of the cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let sep = Paragraph::new("─".repeat(width)).style(separator_style());
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(separator_style());
    frame.render_widget(sep, area);
}

fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
