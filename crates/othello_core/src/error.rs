//! Error types for board mutation and move parsing.

use thiserror::Error;

use crate::types::Move;

/// Reasons a move cannot be applied to a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    Occupied(Move),

    #[error("move {0} captures no discs")]
    NoCapture(Move),
}

/// Reasons a textual move could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected two coordinates, got {0}")]
    WrongArity(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Invalid(#[from] MoveError),
}
