//! Stateless UI rendering.
//!
//! Everything drawn comes from [`App`]; nothing here mutates state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tictactoe_core::{Board, Cell, Mark, Position};

use crate::app::App;
use crate::input::Focus;

const HELP: &str = "Tab focus · Enter/F2 start · arrows+Enter or 1-9 play · F5 reset · Esc close · Ctrl+C quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(3),  // Names
            Constraint::Length(3),  // Turn
            Constraint::Min(11),    // Board
            Constraint::Length(4),  // Status and accessibility
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_names(frame, chunks[1], app);

    let turn = Paragraph::new(app.turn_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(turn, chunks[2]);

    let board_focused = app.focus() == Focus::Board;
    draw_board(frame, chunks[3], app.snapshot().board(), app.cursor(), board_focused);

    draw_status(frame, chunks[4], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    if let Some(message) = app.popup() {
        draw_popup(frame, area, message);
    }
}

fn draw_names(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_name_field(
        frame,
        cols[0],
        "Player X",
        app.name_x().value(),
        app.focus() == Focus::NameX,
    );
    draw_name_field(
        frame,
        cols[1],
        "Player O",
        app.name_o().value(),
        app.focus() == Focus::NameO,
    );
}

fn draw_name_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string()),
    );
    frame.render_widget(field, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, focused: bool) {
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

    for (row, chunk) in [0usize, 2, 4].into_iter().enumerate() {
        let start = row * 3;
        let positions = [start, start + 1, start + 2].map(|i| Position::ALL[i]);
        draw_row(frame, rows[chunk], board, cursor, focused, &positions);
        if chunk < 4 {
            draw_separator(frame, rows[chunk + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    focused: bool,
    positions: &[Position; 3],
) {
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

    draw_cell(frame, cols[0], board, cursor, focused, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], board, cursor, focused, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], board, cursor, focused, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    focused: bool,
    pos: Position,
) {
    let index = pos.to_index();
    let number = (index + 1).to_string();

    let (symbol, base_style) = match board.cells()[index] {
        Cell::Empty => (number.as_str(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if focused && pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line centers the mark vertically in its 3-row cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    if !app.status().is_empty() {
        lines.push(Line::from(app.status().to_string()));
    }
    let label = if app.status_label().is_empty() {
        app.cursor_label()
    } else {
        format!("{} · {}", app.status_label(), app.cursor_label())
    };
    lines.push(Line::from(Span::styled(
        label,
        Style::default().fg(Color::Gray),
    )));

    let status = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = center_rect(area, 44, 5);
    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Winner"));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
