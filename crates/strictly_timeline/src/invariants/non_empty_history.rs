//! Non-empty history invariant: there is always a board to view.

use super::Invariant;
use crate::history::GameState;

/// Invariant: History holds at least the initial board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<GameState> for NonEmptyHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        !state.history.is_empty()
    }

    fn description() -> &'static str {
        "History is never empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(NonEmptyHistoryInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState {
            history: Vec::new(),
            current_step: 0,
        };
        assert!(!NonEmptyHistoryInvariant::holds(&state));
    }
}
