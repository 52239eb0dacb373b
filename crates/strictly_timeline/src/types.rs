//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the mark that moves from the given history step.
    ///
    /// X moves from even steps and O from odd steps, so step 0 is always X.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark returns a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The cell is overwritten regardless of its contents; legality is the
    /// caller's concern.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Self, EngineError> {
        if index >= CELL_COUNT {
            return Err(EngineError::CellOutOfRange { index });
        }
        let mut cells = self.cells;
        cells[index] = Cell::Marked(mark);
        Ok(Self { cells })
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// What the presentation layer shows for the viewed board.
///
/// A full board with no winner still reports the next player; callers that
/// care about draws check fullness themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The viewed board has a complete line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Nobody has won yet on the viewed board.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_step_alternates() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(6), Mark::X);
        assert_eq!(Mark::for_step(7), Mark::O);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Marked(Mark::X)));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_with_mark_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.with_mark(9, Mark::O),
            Err(EngineError::CellOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_display_shows_numbers_for_empty_cells() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }
}
