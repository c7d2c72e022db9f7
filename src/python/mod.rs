//! Python bindings for the mnk-game engine.
//!
//! Lets a Python front end drive a game; the engine keeps the rules and the
//! front end only renders.
//!
//! # Quick Start
//!
//! ```python
//! import mnk_game
//!
//! game = mnk_game.Game(board_size=5, marks_to_win=4)
//! game.set_player_name("X", "Ada")
//!
//! game.play(2, 2)
//! print(game.status_message)   # "Player 2's turn (O)"
//! print(game.board[2][2])      # "X"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_games::PyGame;

/// mnk_game: generalized tic-tac-toe with a configurable win length.
#[pymodule]
fn mnk_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
