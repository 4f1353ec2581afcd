//! Game state with move history and time travel.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::rules::{evaluate, is_full, WinResult};
use super::types::{Board, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the displayed board, derived on demand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Won(Player),
    /// Every square is taken and nobody won.
    #[display("Tie game")]
    Tie,
    /// The game continues with this player to move.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true for a win or a tie.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// A tic-tac-toe game: every board snapshot played so far plus the
/// snapshot currently on display.
///
/// `play` and `jump_to` are the only mutators. Jumping back and then
/// playing discards the snapshots after the jump target.
///
/// Deserialized games are checked against [`GameInvariants`] and
/// rejected if any invariant fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_move: raw.current_move,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<&str> =
                violations.iter().map(|v| v.description.as_str()).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player whose mark the next `play` would place.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_board())
    }

    /// Status of the displayed board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(result) = evaluate(board) {
            GameStatus::Won(result.player)
        } else if is_full(board) {
            GameStatus::Tie
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// The move that produced snapshot `index`.
    ///
    /// `None` for the starting board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.history.get(index - 1)?;
        let after = self.history.get(index)?;
        Position::ALL.iter().find_map(|&pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// Places the next player's mark at cell `index` (0-8).
    ///
    /// Rejected without touching the state when the displayed board is
    /// already won, the index is off the board, or the square is taken.
    /// On success the snapshots after the displayed one are discarded
    /// before the new board is appended.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if let Some(result) = self.winner() {
            debug!(winner = %result.player, "Ignoring play on finished board");
            return Err(MoveError::GameOver(result.player));
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = *self.current_board();
        if !board.is_empty(pos) {
            debug!(position = %pos, "Ignoring play on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board.with_mark(pos, player));
        self.current_move = self.history.len() - 1;

        info!(
            player = %player,
            position = %pos,
            move_number = self.current_move,
            discarded,
            "Move played"
        );
        debug_assert!(GameInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Displays snapshot `index` without changing the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            debug!("Ignoring jump past end of history");
            return Err(MoveError::JumpOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        info!(current_move = index, "Jumped to move");
        debug_assert!(GameInvariants::check_all(self).is_ok());
        Ok(())
    }

    /// Reassembles a game from raw parts, for invariant tests.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
