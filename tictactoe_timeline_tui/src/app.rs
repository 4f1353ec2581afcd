//! Application state and logic.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_timeline::{move_list, GameState, MoveListEntry, Position, SortOrder};
use tracing::debug;

use crate::input::{action_for_key, move_cursor, Action};
use crate::ui::HitMap;

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

/// Main application state.
///
/// Owns the game; `play` and `jump_to` on [`GameState`] are the only
/// ways the game changes. Everything else here is view state.
pub struct App {
    game: GameState,
    sort: SortOrder,
    focus: Focus,
    cursor: Position,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    hits: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: GameState::new(),
            sort,
            focus: Focus::Board,
            cursor: Position::Center,
            selected: 0,
            hits: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current move list order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Keyboard cursor on the board.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Selected move list row, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Rows of the move list in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        move_list(&self.game, self.sort)
    }

    /// Stores the clickable regions of the last frame.
    pub fn set_hitmap(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Plays cell `index`; rejected moves are logged and otherwise ignored.
    pub fn play(&mut self, index: usize) {
        match self.game.play(index) {
            Ok(()) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select_current();
            }
            Err(e) => debug!(index, error = %e, "Move ignored"),
        }
    }

    /// Shows history snapshot `move_number`; out-of-range jumps are ignored.
    pub fn jump_to(&mut self, move_number: usize) {
        match self.game.jump_to(move_number) {
            Ok(()) => self.select_current(),
            Err(e) => debug!(move_number, error = %e, "Jump ignored"),
        }
    }

    /// Reverses the move list, keeping the same move selected.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        let last = self.game.history().len() - 1;
        self.selected = last - self.selected.min(last);
        debug!(sort = ?self.sort, "Sort order toggled");
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Play(index) => self.play(index),
            Action::ToggleSort => self.toggle_sort(),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::History => {
                    if let Some(entry) = self.move_list().get(self.selected) {
                        self.jump_to(entry.move_number);
                    }
                }
            },
        }
    }

    /// Handles a mouse event: left click plays a cell or jumps to a row.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.hits.cell_at(event.column, event.row) {
            self.focus = Focus::Board;
            self.play(index);
        } else if let Some(move_number) = self.hits.entry_at(event.column, event.row) {
            self.focus = Focus::History;
            self.jump_to(move_number);
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Points the selection at the row of the displayed move.
    fn select_current(&mut self) {
        let current = self.game.current_move();
        self.selected = match self.sort {
            SortOrder::Ascending => current,
            SortOrder::Descending => self.game.history().len() - 1 - current,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_timeline::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.cursor(), Position::TopCenter);
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_cursor_enter_plays() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().move_at(1).map(|m| m.position),
            Some(Position::TopLeft)
        );
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('4'), KeyCode::Char('7')]);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().status(), GameStatus::NextPlayer(Player::O));
    }

    #[test]
    fn test_toggle_sort_keeps_selected_move() {
        let mut app = App::new(SortOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        assert_eq!(app.selected(), 2);

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.sort(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
        assert!(app.move_list()[app.selected()].is_current);
        assert_eq!(app.game().current_move(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(SortOrder::Ascending);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Esc]);
        assert!(app.should_quit());
    }
}
