//! # mnk-game
//!
//! A generalized m,n,k-game engine: tic-tac-toe on an N×N board where M
//! marks in a row win, with N and M both changeable at runtime.
//!
//! ## Design Principles
//!
//! 1. **States Are Values**: A move never edits a `GameState`. It returns a
//!    new one, and the previous state stays valid for as long as anyone
//!    holds it.
//!
//! 2. **Pure Rules**: Win detection, draw detection and the move transition
//!    are free functions. The engine keeps nothing between calls.
//!
//! 3. **Illegal Moves Are No-Ops**: Playing on an occupied cell, off the
//!    board or after the game ended returns the input state unchanged.
//!
//! ## Architecture
//!
//! - **Local Win Check**: Only lines through the last placed mark can have
//!   been completed, so win detection walks out from that cell. O(M) per
//!   move instead of O(N²).
//!
//! - **Persistent Data Structures**: The board is an `im::Vector`, so
//!   cloning a state is O(1).
//!
//! ## Modules
//!
//! - `core`: Marks, cells, positions, board, configuration, state
//! - `rules`: Win/draw detection, move transition, initialization
//! - `session`: Owner of the live game for a host application
//! - `display`: Player names and status messages
//! - `error`: Move, configuration and parse errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;
pub mod display;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Direction, GameConfig, GameState, Mark, Position, Status};

pub use crate::rules::{
    apply_move, detect_draw, detect_win, init_game, reconfigure, try_apply_move, validate_move,
    winning_run, WinningRun,
};

pub use crate::session::Session;

pub use crate::display::{status_message, PlayerNames};

pub use crate::error::{ConfigError, MoveError, ParseBoardError};
