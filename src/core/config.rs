//! Game configuration.
//!
//! A game is configured by two numbers:
//! - `board_size` (N): the board is N×N
//! - `marks_to_win` (M): consecutive marks needed to win
//!
//! The configuration boundary enforces `3 ≤ M ≤ N ≤ MAX_BOARD_SIZE`, either
//! by rejecting ([`GameConfig::new`]) or by clamping ([`GameConfig::clamped`]).
//! The rules engine itself tolerates `M > N`: such a game can never be won,
//! so every completed game is a draw. It never builds a board larger than
//! [`MAX_BOARD_SIZE`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Smallest board the configuration boundary accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board the engine builds. Larger sizes are rejected by
/// [`GameConfig::new`] and saturated everywhere else.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Smallest win length the configuration boundary accepts.
pub const MIN_MARKS_TO_WIN: usize = 3;

/// Board size and win threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension N.
    pub board_size: usize,

    /// Consecutive marks needed to win (M).
    pub marks_to_win: usize,
}

impl Default for GameConfig {
    /// Classic tic-tac-toe: 3×3, three in a row.
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            marks_to_win: MIN_MARKS_TO_WIN,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// Checks board size first, then the lower and upper bound on
    /// `marks_to_win`.
    pub fn new(board_size: usize, marks_to_win: usize) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            marks_to_win,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration without validation.
    ///
    /// The engine accepts any values here; `marks_to_win > board_size`
    /// produces a game nobody can win. `board_size` saturates at
    /// [`MAX_BOARD_SIZE`].
    #[must_use]
    pub const fn unchecked(board_size: usize, marks_to_win: usize) -> Self {
        Self {
            board_size: saturate_board_size(board_size),
            marks_to_win,
        }
    }

    /// Create a configuration by clamping into the valid range.
    ///
    /// `board_size` is clamped into `[3, MAX_BOARD_SIZE]`, then
    /// `marks_to_win` is clamped into `[3, board_size]`.
    #[must_use]
    pub fn clamped(board_size: usize, marks_to_win: usize) -> Self {
        let board_size = board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            board_size,
            marks_to_win: marks_to_win.clamp(MIN_MARKS_TO_WIN, board_size),
        }
    }

    /// The standard threshold for a board: three in a row.
    #[must_use]
    pub const fn standard(board_size: usize) -> Self {
        Self::unchecked(board_size, MIN_MARKS_TO_WIN)
    }

    /// Set the board size, keeping the threshold.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the threshold, keeping the board size.
    #[must_use]
    pub fn with_marks_to_win(mut self, marks_to_win: usize) -> Self {
        self.marks_to_win = marks_to_win;
        self
    }

    /// Check `3 ≤ N ≤ MAX_BOARD_SIZE` and `3 ≤ M ≤ N`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
            });
        }
        if self.marks_to_win < MIN_MARKS_TO_WIN {
            return Err(ConfigError::MarksTooFew {
                marks: self.marks_to_win,
            });
        }
        if self.marks_to_win > self.board_size {
            return Err(ConfigError::MarksExceedBoard {
                marks: self.marks_to_win,
                size: self.board_size,
            });
        }
        Ok(())
    }

    /// Check if any line on the board is long enough to win.
    #[must_use]
    pub fn is_winnable(&self) -> bool {
        self.marks_to_win <= self.board_size
    }
}

/// Cap a requested board size at [`MAX_BOARD_SIZE`].
pub(crate) const fn saturate_board_size(board_size: usize) -> usize {
    if board_size > MAX_BOARD_SIZE {
        MAX_BOARD_SIZE
    } else {
        board_size
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{n}x{n}, {m} to win",
            n = self.board_size,
            m = self.marks_to_win
        )
    }
}
