//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and the engine checks them as a
//! postcondition in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod no_moves_after_win;
pub mod non_empty_history;
pub mod single_mark_steps;
pub mod step_in_bounds;

pub use no_moves_after_win::NoMovesAfterWinInvariant;
pub use non_empty_history::NonEmptyHistoryInvariant;
pub use single_mark_steps::SingleMarkStepsInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All game state invariants as a composable set.
pub type TimelineInvariants = (
    NonEmptyHistoryInvariant,
    StepInBoundsInvariant,
    SingleMarkStepsInvariant,
    NoMovesAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{GameState, HistoryEntry};
    use crate::types::Board;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TimelineInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_rewind() {
        let state = GameState::new()
            .with_move(0)
            .and_then(|s| s.with_move(4))
            .and_then(|s| s.with_move(8))
            .and_then(|s| s.with_step(1))
            .unwrap();
        assert!(TimelineInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let state = GameState {
            history: Vec::new(),
            current_step: 3,
        };
        let violations = TimelineInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            NonEmptyHistoryInvariant::description()
        );
        assert_eq!(
            violations[1].description,
            StepInBoundsInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Bounds = (NonEmptyHistoryInvariant, StepInBoundsInvariant);
        let state = GameState {
            history: vec![HistoryEntry::new(Board::new())],
            current_step: 1,
        };
        assert!(Bounds::check_all(&GameState::new()).is_ok());
        assert!(Bounds::check_all(&state).is_err());
    }
}
