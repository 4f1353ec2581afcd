//! Move list entries for the history panel.
//!
//! The list is a view of [`GameState::history`]: reordering it never
//! touches the history or the current move.

use super::GameState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the toggle control, naming the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this row jumps to.
    pub move_number: usize,
    /// True for the snapshot on display.
    pub is_current: bool,
    /// Row text.
    pub description: String,
}

impl MoveListEntry {
    /// Builds the row for `move_number`.
    pub fn new(move_number: usize, current_move: usize) -> Self {
        let is_current = move_number == current_move;
        let description = if is_current {
            format!("You are at move #{move_number}")
        } else if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{move_number}")
        };
        Self {
            move_number,
            is_current,
            description,
        }
    }

    /// Whether activating this row would change anything.
    pub fn is_selectable(&self) -> bool {
        !self.is_current
    }
}

/// Builds the move list for `game` in the requested order.
#[instrument(skip(game), fields(len = game.history().len()))]
pub fn move_list(game: &GameState, order: SortOrder) -> Vec<MoveListEntry> {
    let current = game.current_move();
    let entries = (0..game.history().len()).map(|index| MoveListEntry::new(index, current));
    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}
