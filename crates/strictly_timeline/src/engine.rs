//! Rewindable tic-tac-toe engine.
//!
//! The engine owns a [`GameState`] and replaces it wholesale on every
//! transition. Moves play from the viewed step, so a move made after a
//! rewind discards the entries that followed it.

use crate::action::MoveOutcome;
use crate::contracts::LegalMove;
use crate::error::EngineError;
use crate::history::{GameState, HistoryEntry};
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, CELL_COUNT, Mark, Status};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine with time travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game viewing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Adopts an existing state after checking every invariant.
    #[instrument(skip(state), fields(len = state.len(), step = state.current_step()))]
    pub fn from_state(state: GameState) -> Result<Self, EngineError> {
        check_invariants(&state)?;
        Ok(Self { state })
    }

    /// Plays `cells` in order from a fresh game.
    ///
    /// Ignored moves are skipped exactly as they would be interactively; an
    /// out-of-range index aborts the replay.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for &cell in cells {
            engine.apply_move(cell)?;
        }
        Ok(engine)
    }

    /// Places the mark of the player to move at `cell` on the viewed board.
    ///
    /// Returns [`MoveOutcome::Ignored`] without touching the state when the
    /// viewed board is already won or the cell is taken.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `cell` is not 0-8.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, EngineError> {
        if cell >= CELL_COUNT {
            warn!(cell, "Cell index out of range");
            return Err(EngineError::CellOutOfRange { index: cell });
        }

        if let Err(rejection) = LegalMove::check(&self.state, cell) {
            debug!(%rejection, "Move ignored");
            return Ok(MoveOutcome::Ignored(rejection));
        }

        let mark = self.state.to_move();
        let next = self.state.with_move(cell)?;

        // Postcondition: verify invariants in debug builds
        #[cfg(debug_assertions)]
        check_invariants(&next)?;

        self.state = next;
        let step = self.state.current_step();
        debug!(%mark, cell, step, "Move placed");

        Ok(MoveOutcome::Placed { mark, cell, step })
    }

    /// Views the board recorded at `step`. History is left intact.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not below
    /// [`history_length`](Self::history_length).
    #[instrument(skip(self), fields(len = self.state.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let next = self.state.with_step(step).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })?;

        #[cfg(debug_assertions)]
        check_invariants(&next)?;

        self.state = next;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Returns the viewed board.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Returns the winner of the viewed board, if any.
    pub fn current_winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Returns the mark that moves next from the viewed step.
    pub fn current_player(&self) -> Mark {
        self.state.to_move()
    }

    /// Returns the number of history entries (one per reachable step).
    pub fn history_length(&self) -> usize {
        self.state.len()
    }

    /// Returns the viewed step.
    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Returns the underlying state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the status line for the viewed board.
    pub fn status(&self) -> Status {
        match self.current_winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// Returns the cells a move could go into from the viewed board.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}

fn check_invariants(state: &GameState) -> Result<(), EngineError> {
    TimelineInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
