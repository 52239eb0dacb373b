//! Move preconditions for tic-tac-toe.
//!
//! Each precondition looks at the viewed board only. A failed precondition
//! means the move is ignored, never that the caller made a mistake.

use crate::action::Rejection;
use crate::history::GameState;
use crate::rules::check_winner;
use tracing::instrument;

/// Precondition: the viewed board has no winner yet.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Checks that play can continue from the viewed board.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match check_winner(state.current_board()) {
            Some(winner) => Err(Rejection::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty on the viewed board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that `cell` can take a mark.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, cell: usize) -> Result<(), Rejection> {
        if state.current_board().is_empty(cell) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(cell))
        }
    }
}

/// Composite precondition: a move is legal if the board is undecided and the
/// cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, winner first.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, cell: usize) -> Result<(), Rejection> {
        BoardUndecided::check(state)?;
        CellIsEmpty::check(state, cell)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn played(cells: &[usize]) -> GameState {
        cells
            .iter()
            .try_fold(GameState::new(), |state, &cell| state.with_move(cell))
            .unwrap()
    }

    #[test]
    fn test_empty_cell_is_legal() {
        assert!(LegalMove::check(&GameState::new(), 4).is_ok());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let state = played(&[4]);
        assert_eq!(
            LegalMove::check(&state, 4),
            Err(Rejection::CellOccupied(4))
        );
    }

    #[test]
    fn test_won_board_rejected_before_cell_check() {
        let state = played(&[0, 4, 1, 5, 2]);
        assert_eq!(
            LegalMove::check(&state, 0),
            Err(Rejection::GameOver(Mark::X))
        );
        assert_eq!(
            LegalMove::check(&state, 8),
            Err(Rejection::GameOver(Mark::X))
        );
    }

    #[test]
    fn test_rewound_board_is_undecided_again() {
        let state = played(&[0, 4, 1, 5, 2]).with_step(4).unwrap();
        assert!(BoardUndecided::check(&state).is_ok());
        assert!(LegalMove::check(&state, 8).is_ok());
    }
}
