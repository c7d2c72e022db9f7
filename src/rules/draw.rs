//! Draw detection.

use crate::core::Board;

/// Check if the board has no empty cells left.
///
/// Only meaningful once the last move has been checked for a win: a full
/// board can also hold a winning run, and a win takes precedence.
#[must_use]
pub fn detect_draw(board: &Board) -> bool {
    board.is_full()
}
