//! First-class action types for tic-tac-toe.
//!
//! A [`Move`] is what separates one history snapshot from the next.
//! [`MoveError`] explains why a requested play or jump was ignored.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a play or jump request was rejected.
///
/// Rejections never change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The displayed board already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(#[error(not(source))] Player),

    /// Cell index outside 0-8.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(#[error(not(source))] usize),

    /// Square is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),

    /// History index past the last snapshot.
    #[display("Move #{index} does not exist (history has {len} entries)")]
    JumpOutOfRange {
        /// Requested history index.
        index: usize,
        /// Current history length.
        len: usize,
    },
}
