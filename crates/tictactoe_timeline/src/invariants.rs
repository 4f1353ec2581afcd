//! First-class invariants for a game with history.
//!
//! Invariants are logical properties that must hold after every `play`
//! and `jump_to`. They are checked in debug builds and can be tested
//! independently.

use super::{GameState, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Invariant: the history starts empty and grows one mark at a time.
///
/// Snapshot 0 is the empty board. Each later snapshot equals its
/// predecessor plus exactly one newly occupied square; no square is
/// overwritten or cleared.
pub struct SingleStepHistory;

impl Invariant<GameState> for SingleStepHistory {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.occupied() != 0 {
            return false;
        }
        history.windows(2).all(|pair| {
            let mut added = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (before, after) {
                    (b, a) if b == a => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

/// Invariant: X and O alternate, X first.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(game: &GameState) -> bool {
        (1..game.history().len()).all(|index| {
            game.move_at(index)
                .is_some_and(|mov| mov.player == Player::for_move(index - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

/// Invariant: the displayed move exists in the history.
pub struct PointerInRange;

impl Invariant<GameState> for PointerInRange {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move points into the history"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (SingleStepHistory, AlternatingTurn, PointerInRange);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::new();
        for index in [4, 0, 8, 2] {
            game.play(index).unwrap();
        }
        game.jump_to(1).unwrap();
        game.play(6).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_overwritten_square_violates_single_step() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::Center, Player::O);
        let game = GameState::from_parts(vec![Board::new(), first, second], 2);
        assert!(!SingleStepHistory::holds(&game));
    }

    #[test]
    fn test_double_mark_violates_single_step() {
        let two = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let game = GameState::from_parts(vec![Board::new(), two], 1);
        assert!(!SingleStepHistory::holds(&game));
    }

    #[test]
    fn test_wrong_opener_violates_alternation() {
        let first = Board::new().with_mark(Position::Center, Player::O);
        let game = GameState::from_parts(vec![Board::new(), first], 1);
        assert!(SingleStepHistory::holds(&game));
        assert!(!AlternatingTurn::holds(&game));
    }

    #[test]
    fn test_dangling_pointer_reported() {
        let game = GameState::from_parts(vec![Board::new()], 3);
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, PointerInRange::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SingleStepHistory, PointerInRange);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
