//! Game state: board, turn and result.
//!
//! A `GameState` is a value. It is never edited in place; every accepted
//! move, reset or reconfiguration produces a new one and the old value is
//! simply dropped. Cloning is O(1) because the board is a persistent vector.
//!
//! ## Invariants
//!
//! - `Won` ⇒ `winner` is set and that mark has a run of at least
//!   `marks_to_win` on the board.
//! - `Draw` ⇒ no winner, the board is full, and neither mark has a winning run.
//! - `Playing` ⇒ no winner.
//! - Once the status leaves `Playing` no further mark is placed.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::{saturate_board_size, GameConfig};
use super::mark::Mark;

/// Result status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Draw,
}

impl Status {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Draw => "draw",
        };
        write!(f, "{name}")
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_turn: Mark,
    status: Status,
    winner: Option<Mark>,
}

impl GameState {
    /// Create a fresh game: empty board, X to move, playing.
    ///
    /// This is the one initialization routine. Startup, reset and
    /// reconfiguration all go through it. A board size above
    /// [`MAX_BOARD_SIZE`](super::config::MAX_BOARD_SIZE) is saturated in the
    /// stored configuration too, so `config().board_size` always matches
    /// the board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let config = GameConfig {
            board_size: saturate_board_size(config.board_size),
            ..config
        };
        Self {
            board: Board::new(config.board_size),
            config,
            current_turn: Mark::X,
            status: Status::Playing,
            winner: None,
        }
    }

    /// Assemble a state from an already-checked transition.
    pub(crate) fn from_parts(
        config: GameConfig,
        board: Board,
        current_turn: Mark,
        status: Status,
        winner: Option<Mark>,
    ) -> Self {
        debug_assert_eq!(status == Status::Won, winner.is_some());
        Self {
            config,
            board,
            current_turn,
            status,
            winner,
        }
    }

    /// Configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    ///
    /// Once the game is over this stays at the player who made the final
    /// move.
    #[must_use]
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Winning mark, set only when the status is `Won`.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    #[must_use]
    pub fn marks_to_win(&self) -> usize {
        self.config.marks_to_win
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
