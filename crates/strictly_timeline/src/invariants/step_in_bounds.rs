//! Step bounds invariant: the viewed step names an existing entry.

use super::Invariant;
use crate::history::GameState;

/// Invariant: `current_step` indexes a valid history entry.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step < state.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::types::Board;

    #[test]
    fn test_last_step_holds() {
        let state = GameState::new().with_move(0).unwrap();
        assert!(StepInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_step_past_end_violates() {
        let state = GameState {
            history: vec![HistoryEntry::new(Board::new())],
            current_step: 1,
        };
        assert!(!StepInBoundsInvariant::holds(&state));
    }
}
