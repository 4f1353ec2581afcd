//! Tic-tac-toe with move history.
//!
//! Every board position played is kept as a snapshot, so a game can be
//! rewound to any earlier move and continued from there.
//!
//! # Architecture
//!
//! - **Rules**: pure win and tie checks over the eight winning lines
//! - **GameState**: snapshot history, current move pointer, `play` and `jump_to`
//! - **Timeline**: move list rows and sort order for a history panel
//! - **Invariants**: checkable properties of a game's history
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winner().unwrap().indices(), [0, 3, 6]);
//!
//! game.jump_to(0).unwrap();
//! game.play(4).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod timeline;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::{GameState, GameStatus};
pub use position::Position;
pub use rules::{evaluate, WinResult};
pub use timeline::{move_list, MoveListEntry, SortOrder};
pub use types::{Board, Player, Square};
