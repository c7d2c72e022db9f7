//! Conversions between engine types and Python values.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, Mark};
use crate::error::{ConfigError, MoveError};

/// Parse a mark from `"X"` or `"O"` (either case).
pub fn mark_from_str(s: &str) -> PyResult<Mark> {
    match s {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        other => Err(PyValueError::new_err(format!(
            "invalid mark '{other}' (expected 'X' or 'O')"
        ))),
    }
}

pub fn mark_str(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "X",
        Mark::O => "O",
    }
}

/// Python view of a cell: the mark string, or `None` when empty.
pub fn cell_value(cell: Cell) -> Option<&'static str> {
    cell.mark().map(mark_str)
}

impl From<ConfigError> for PyErr {
    fn from(err: ConfigError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<MoveError> for PyErr {
    fn from(err: MoveError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}
