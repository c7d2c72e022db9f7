//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::session::Session;

use super::py_core::{cell_value, mark_from_str, mark_str};

/// Python wrapper for a game session.
///
/// Holds the live game; every call replaces it with the next state.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: Session,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - board_size: Board dimension N (at least 3)
    /// - marks_to_win: Consecutive marks needed to win (3..=board_size)
    #[new]
    #[pyo3(signature = (board_size = 3, marks_to_win = 3))]
    fn new(board_size: usize, marks_to_win: usize) -> PyResult<Self> {
        let config = GameConfig::new(board_size, marks_to_win)?;
        Ok(Self {
            session: Session::new(config),
        })
    }

    /// Play the current player's mark. Illegal moves are ignored.
    fn play(&mut self, row: usize, col: usize) {
        self.session.play(row, col);
    }

    /// Play the current player's mark, raising ValueError if illegal.
    fn try_play(&mut self, row: usize, col: usize) -> PyResult<()> {
        self.session.try_play(row, col)?;
        Ok(())
    }

    /// Start over with the same settings.
    fn reset(&mut self) {
        self.session.reset();
    }

    /// Change settings and start over. Raises ValueError if out of range.
    fn reconfigure(&mut self, board_size: usize, marks_to_win: usize) -> PyResult<()> {
        self.session.reconfigure(board_size, marks_to_win)?;
        Ok(())
    }

    /// Rename the player using `mark` ("X" or "O").
    fn set_player_name(&mut self, mark: &str, name: String) -> PyResult<()> {
        self.session.set_player_name(mark_from_str(mark)?, name);
        Ok(())
    }

    /// Board rows; each cell is "X", "O" or None.
    #[getter]
    fn board(&self) -> Vec<Vec<Option<&'static str>>> {
        let board = self.session.state().board();
        (0..board.size())
            .map(|row| board.row(row).map(cell_value).collect())
            .collect()
    }

    #[getter]
    fn current_turn(&self) -> &'static str {
        mark_str(self.session.state().current_turn())
    }

    /// "playing", "won" or "draw".
    #[getter]
    fn status(&self) -> String {
        self.session.state().status().to_string()
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.session.state().winner().map(mark_str)
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.session.config().board_size
    }

    #[getter]
    fn marks_to_win(&self) -> usize {
        self.session.config().marks_to_win
    }

    #[getter]
    fn status_message(&self) -> String {
        self.session.status_message()
    }

    fn __str__(&self) -> String {
        self.session.state().board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game({}, status={}, turn={})",
            self.session.config(),
            self.status(),
            self.current_turn()
        )
    }
}
