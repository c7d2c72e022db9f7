//! Error types.
//!
//! Illegal moves are no-ops in [`apply_move`](crate::rules::apply_move); the
//! reason a move was refused is still available as a [`MoveError`] through
//! [`try_apply_move`](crate::rules::try_apply_move).

use thiserror::Error;

use crate::core::{Cell, Status};

/// Why a move was refused.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is over ({status})")]
    GameOver { status: Status },

    #[error("position ({row}, {col}) is off the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is already occupied by {cell}")]
    Occupied { row: usize, col: usize, cell: Cell },
}

/// Configuration rejected at the configuration boundary.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {size} is too small (minimum {min})", min = crate::core::MIN_BOARD_SIZE)]
    BoardTooSmall { size: usize },

    #[error("board size {size} is too large (maximum {max})", max = crate::core::MAX_BOARD_SIZE)]
    BoardTooLarge { size: usize },

    #[error("marks to win {marks} is too few (minimum {min})", min = crate::core::MIN_MARKS_TO_WIN)]
    MarksTooFew { marks: usize },

    #[error("marks to win {marks} exceeds board size {size}")]
    MarksExceedBoard { marks: usize, size: usize },
}

/// Malformed board text.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("board text has no rows")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("invalid cell character '{ch}' at ({row}, {col})")]
    InvalidCell { ch: char, row: usize, col: usize },
}
