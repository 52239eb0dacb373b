//! Strictly Timeline - tic-tac-toe with a rewindable move history
//!
//! The crate is the game core only: it keeps every board played so far,
//! lets the caller view any earlier board, and continues play from the
//! viewed board. Rendering is left to the caller, which re-reads the engine
//! after each call.
//!
//! # Architecture
//!
//! - **Types**: marks, cells and immutable boards
//! - **History**: board snapshots and the game state aggregate
//! - **Rules**: pure win and draw checks
//! - **Contracts**: move preconditions that classify ignored moves
//! - **Invariants**: state properties checked after every transition
//! - **Engine**: the single entry point for play and time travel
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameEngine, Mark};
//!
//! # fn main() -> Result<(), strictly_timeline::EngineError> {
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     engine.apply_move(cell)?;
//! }
//! assert_eq!(engine.current_winner(), Some(Mark::X));
//!
//! // Rewind to before X's winning move and branch.
//! engine.jump_to(4)?;
//! engine.apply_move(8)?;
//! assert_eq!(engine.history_length(), 6);
//! assert_eq!(engine.current_winner(), None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod error;
mod history;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{MoveOutcome, Rejection};
pub use contracts::{BoardUndecided, CellIsEmpty, LegalMove};
pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{GameState, HistoryEntry};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, NoMovesAfterWinInvariant,
    NonEmptyHistoryInvariant, SingleMarkStepsInvariant, StepInBoundsInvariant,
    TimelineInvariants,
};
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_draw, is_full, winning_line};
pub use types::{Board, CELL_COUNT, Cell, Mark, Status};
