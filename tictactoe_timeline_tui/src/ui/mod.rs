//! Stateless UI rendering.
//!
//! [`draw`] renders the whole screen from an [`App`] and returns the
//! rectangles it drew clickable things into, so mouse clicks can be
//! mapped back to cells and move list rows.

mod board;
mod history;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_timeline::GameStatus;

use crate::app::{App, Focus};

/// Screen regions that react to mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, usize)>,
    entries: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Records the area of board cell `index`.
    pub fn add_cell(&mut self, area: Rect, index: usize) {
        self.cells.push((area, index));
    }

    /// Records the area of the move list row for `move_number`.
    pub fn add_entry(&mut self, area: Rect, move_number: usize) {
        self.entries.push((area, move_number));
    }

    /// Board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        find(&self.cells, column, row)
    }

    /// Move number of the move list row under the given terminal coordinates.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        find(&self.entries, column, row)
    }

    /// Area of board cell `index`, if it was drawn.
    #[cfg(test)]
    pub fn cell_area(&self, index: usize) -> Option<Rect> {
        self.cells.iter().find(|(_, i)| *i == index).map(|(area, _)| *area)
    }

    /// Area of the row for `move_number`, if it was drawn.
    #[cfg(test)]
    pub fn entry_area(&self, move_number: usize) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(_, m)| *m == move_number)
            .map(|(area, _)| *area)
    }
}

fn find(regions: &[(Rect, usize)], column: u16, row: u16) -> Option<usize> {
    let point = ratatui::layout::Position::new(column, row);
    regions
        .iter()
        .find(|(area, _)| area.contains(point))
        .map(|(_, value)| *value)
}

/// Renders the full screen.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board + history
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let status = app.game().status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Tie => Style::default().fg(Color::Magenta),
        GameStatus::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(chunks[2]);

    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    board::render_board(
        frame,
        body[0],
        app.game().current_board(),
        app.game().winner(),
        cursor,
        &mut hits,
    );

    let entries = app.move_list();
    let focused = app.focus() == Focus::History;
    let anchor = if focused {
        app.selected()
    } else {
        entries.iter().position(|entry| entry.is_current).unwrap_or(0)
    };
    history::render_history(frame, body[1], &entries, app.sort(), anchor, focused, &mut hits);

    let help = "1-9 play | arrows move | Enter select | Tab focus | s sort | q quit";
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tictactoe_timeline::{Player, SortOrder};

    fn render(app: &App) -> (String, HitMap) {
        render_sized(app, 80, 24)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|f| hits = draw(f, app)).unwrap();
        (buffer_text(terminal.backend().buffer()), hits)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_fresh_screen() {
        let app = App::new(SortOrder::Ascending);
        let (text, hits) = render(&app);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Move History"));
        assert!(text.contains("Sort Descending"));
        assert!(text.contains("You are at move #0"));
        for index in 0..9 {
            assert!(hits.cell_area(index).is_some());
        }
    }

    #[test]
    fn test_winner_shown() {
        let mut app = App::new(SortOrder::Ascending);
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        let (text, _) = render(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #4"));
    }

    #[test]
    fn test_click_cell_plays() {
        let mut app = App::new(SortOrder::Ascending);
        let (_, hits) = render(&app);
        let area = hits.cell_area(4).unwrap();
        app.set_hitmap(hits);

        app.handle_mouse(click(area.x, area.y));
        assert_eq!(
            app.game().current_board().get(tictactoe_timeline::Position::Center),
            tictactoe_timeline::Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_click_entry_jumps() {
        let mut app = App::new(SortOrder::Descending);
        for key in ['1', '2', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let (text, hits) = render(&app);
        assert!(text.contains("Sort Ascending"));
        let area = hits.entry_area(0).unwrap();
        app.set_hitmap(hits);

        app.handle_mouse(click(area.x, area.y));
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.focus(), Focus::History);
    }

    /// X O X / X O O / O X X, ending in a tie with ten history entries.
    fn tied_game(sort: SortOrder) -> App {
        let mut app = App::new(sort);
        for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app
    }

    #[test]
    fn test_short_terminal_scrolls_to_game_start() {
        let mut app = tied_game(SortOrder::Descending);
        let (text, _) = render_sized(&app, 80, 18);
        assert!(text.contains("Tie game"));
        assert!(text.contains("You are at move #9"));

        app.handle_key(KeyCode::Tab);
        for _ in 0..9 {
            app.handle_key(KeyCode::Down);
            let (_, hits) = render_sized(&app, 80, 18);
            let selected = app.move_list()[app.selected()].move_number;
            assert!(hits.entry_area(selected).is_some(), "row for move {selected} not drawn");
        }
        assert_eq!(app.selected(), 9);

        let (text, hits) = render_sized(&app, 80, 18);
        assert!(text.contains("Go to game start"));
        let area = hits.entry_area(0).unwrap();
        app.set_hitmap(hits);
        app.handle_mouse(click(area.x, area.y));
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history().len(), 10);
    }

    #[test]
    fn test_short_terminal_keeps_current_move_visible() {
        let mut app = tied_game(SortOrder::Ascending);
        app.jump_to(9);
        let (text, _) = render_sized(&app, 80, 18);
        assert!(text.contains("You are at move #9"));

        app.jump_to(0);
        let (text, hits) = render_sized(&app, 80, 18);
        assert!(text.contains("You are at move #0"));
        assert!(hits.entry_area(1).is_some());
    }

    #[test]
    fn test_hitmap_lookup() {
        let mut hits = HitMap::default();
        hits.add_cell(Rect::new(0, 0, 4, 3), 7);
        hits.add_entry(Rect::new(10, 5, 20, 1), 2);
        assert_eq!(hits.cell_at(3, 2), Some(7));
        assert_eq!(hits.cell_at(4, 2), None);
        assert_eq!(hits.entry_at(15, 5), Some(2));
        assert_eq!(hits.entry_at(15, 6), None);
    }
}
