//! Tic-tac-toe board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tictactoe_timeline::{Board, Player, Position, Square, WinResult};

use super::HitMap;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board, highlighting the winning line and the cursor.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    winner: Option<WinResult>,
    cursor: Option<Position>,
    hits: &mut HitMap,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
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
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let cell_area = cols[col * 2];
            let style = square_style(
                board.get(pos),
                winner.is_some_and(|w| w.contains(pos)),
                cursor == Some(pos),
            );
            render_square(f, cell_area, board.get(pos), pos, style);
            hits.add_cell(cell_area, pos.to_index());
        }
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);

        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn square_style(square: Square, winning: bool, under_cursor: bool) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };
    let base = if winning { base.bg(Color::Green) } else { base };
    if under_cursor {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn render_square(f: &mut Frame, area: Rect, square: Square, pos: Position, style: Style) {
    let text = match square {
        Square::Empty => (pos.to_index() + 1).to_string(),
        Square::Occupied(player) => player.to_string(),
    };
    // Vertically center the symbol in the cell.
    let lines = vec![Line::from(""), Line::from(text), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
