//! Rules engine: pure functions over `GameState`.
//!
//! - `win`: win detection through the last placed mark
//! - `draw`: full-board detection
//! - `engine`: the move transition
//! - `lifecycle`: fresh games and reconfiguration
//!
//! Nothing here keeps state between calls. Callers own the current
//! `GameState` and replace it with whatever these functions return.

pub mod win;
pub mod draw;
pub mod engine;
pub mod lifecycle;

pub use win::{detect_win, winning_run, WinningRun};
pub use draw::detect_draw;
pub use engine::{apply_move, try_apply_move, validate_move};
pub use lifecycle::{init_game, reconfigure};
