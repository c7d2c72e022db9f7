//! Core data model: marks, cells, positions, board, configuration, state.
//!
//! Everything here is a plain value. Transitions between states live in
//! `rules`; this module only defines what a state is.

pub mod mark;
pub mod position;
pub mod board;
pub mod config;
pub mod state;

pub use mark::{Cell, Mark};
pub use position::{Direction, Position};
pub use board::Board;
pub use config::{GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_MARKS_TO_WIN};
pub use state::{GameState, Status};
