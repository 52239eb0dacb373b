//! Terminal win invariant: nothing is played on a won board.

use super::Invariant;
use crate::history::GameState;
use crate::rules::check_winner;

/// Invariant: No history entry follows a board that already has a winner.
pub struct NoMovesAfterWinInvariant;

impl Invariant<GameState> for NoMovesAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let last = history.len().saturating_sub(1);
        history
            .iter()
            .take(last)
            .all(|entry| check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::types::{Board, Mark};

    #[test]
    fn test_winning_board_last_holds() {
        let state = [0, 4, 1, 5, 2]
            .into_iter()
            .try_fold(GameState::new(), |s, cell| s.with_move(cell))
            .unwrap();
        assert!(NoMovesAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let won = [0, 4, 1, 5, 2]
            .into_iter()
            .try_fold(GameState::new(), |s, cell| s.with_move(cell))
            .unwrap();
        // with_move skips legality checks, so this builds the forbidden state.
        let state = won.with_move(8).unwrap();
        assert!(!NoMovesAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_holds_vacuously() {
        let state = GameState {
            history: Vec::<HistoryEntry>::new(),
            current_step: 0,
        };
        assert!(NoMovesAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_rewound_view_is_irrelevant() {
        let entries = [Board::new(), Board::new().with_mark(0, Mark::X).unwrap()];
        let state = GameState {
            history: entries.into_iter().map(HistoryEntry::new).collect(),
            current_step: 0,
        };
        assert!(NoMovesAfterWinInvariant::holds(&state));
    }
}
