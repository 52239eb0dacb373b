//! Single mark invariant: each history entry adds exactly one mark.

use super::Invariant;
use crate::history::GameState;
use crate::types::{Board, Cell, Mark};

/// Invariant: History starts from an empty board and each later board
/// differs from its predecessor in exactly one cell.
///
/// That cell goes from Empty to the mark owning the predecessor's step, so
/// X fills cells from even steps and O from odd ones.
pub struct SingleMarkStepsInvariant;

impl Invariant<GameState> for SingleMarkStepsInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && *first.board() != Board::new()
        {
            return false;
        }

        history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| adds_one_mark(pair[0].board(), pair[1].board(), Mark::for_step(step)))
    }

    fn description() -> &'static str {
        "History starts empty and each step adds exactly one mark for the player to move"
    }
}

fn adds_one_mark(before: &Board, after: &Board, mark: Mark) -> bool {
    let mut changed = before
        .cells()
        .iter()
        .zip(after.cells())
        .filter(|(old, new)| old != new);

    match (changed.next(), changed.next()) {
        (Some((old, new)), None) => *old == Cell::Empty && *new == Cell::Marked(mark),
        _ => false,
    }
}
