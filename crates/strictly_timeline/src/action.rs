//! Move outcomes.
//!
//! Illegal moves are part of normal play (a click on a taken cell), so they
//! come back as values rather than errors.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Mark),

    /// The cell is already occupied on the viewed board.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

/// Result of a well-formed move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a new history entry appended.
    #[display("{} played cell {} (move #{})", mark, cell + 1, step)]
    Placed {
        /// The mark that was placed.
        mark: Mark,
        /// The cell it went into.
        cell: usize,
        /// The step the engine now views (the new last entry).
        step: usize,
    },
    /// Nothing changed.
    #[display("Ignored: {}", _0)]
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }

    /// Returns the rejection if the move was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Placed { .. } => None,
            MoveOutcome::Ignored(rejection) => Some(*rejection),
        }
    }
}
