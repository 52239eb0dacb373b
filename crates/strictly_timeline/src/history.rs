//! Board history and the game state aggregate.

use crate::error::EngineError;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Returns the board recorded in this entry.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Complete game state: every board played so far and the one being viewed.
///
/// Turn order is not stored. The mark to move is always derived from
/// `current_step`. Deserialization rejects an empty history or a step past
/// its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates a fresh game: one empty board, viewing step 0.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new())],
            current_step: 0,
        }
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the viewed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the number of history entries.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false for states built by the engine.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the viewed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Returns the mark that moves next from the viewed step.
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Builds the successor state for a move at `cell`.
    ///
    /// Entries after the viewed step are discarded before the new board is
    /// appended. The move is not checked for legality here.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub(crate) fn with_move(&self, cell: usize) -> Result<Self, EngineError> {
        let mark = self.to_move();
        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }

        let board = self.current_board().with_mark(cell, mark)?;
        history.push(HistoryEntry::new(board));
        let current_step = history.len() - 1;

        Ok(Self {
            history,
            current_step,
        })
    }

    /// Builds a state viewing `step`, with the history unchanged.
    #[instrument(skip(self))]
    pub(crate) fn with_step(&self, step: usize) -> Result<Self, EngineError> {
        if step >= self.history.len() {
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.current_step >= raw.history.len() {
            return Err(EngineError::StepOutOfRange {
                step: raw.current_step,
                len: raw.history.len(),
            });
        }
        Ok(Self {
            history: raw.history,
            current_step: raw.current_step,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
