//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from history
//! bookkeeping so the renderer and the game state share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{evaluate, WinResult, LINES};
