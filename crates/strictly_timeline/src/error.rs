//! Engine error types.

/// Error returned by engine operations.
///
/// Only caller mistakes end up here. Illegal but in-range moves are absorbed
/// and reported through [`MoveOutcome::Ignored`](crate::MoveOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// A history step past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl EngineError {
    /// Returns true for the out-of-range family of errors.
    pub fn is_invalid_index(&self) -> bool {
        matches!(
            self,
            EngineError::CellOutOfRange { .. } | EngineError::StepOutOfRange { .. }
        )
    }
}

impl std::error::Error for EngineError {}
