//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines as triples of cell indices.
///
/// Order matters only for reporting: when several lines are complete the
/// first one in this table wins.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line holding three identical marks,
/// `None` otherwise (including a full board with no line).
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a)).and_then(Cell::mark)
}

/// Returns the first complete line on the board, in table order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();

    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        matches!(cells[a], Cell::Marked(_)) && cells[b] == cells[a] && cells[c] == cells[a]
    })
}
