//! Win detection through the last placed mark.
//!
//! A move can only complete lines that pass through the cell it was played
//! on, so instead of scanning the whole board after every move we walk the
//! four axes out from that cell. Each walk stops at the board edge, at the
//! first cell not holding the mark, or after `M-1` steps, whichever comes
//! first. That makes the check O(M) per move regardless of board size.
//!
//! These functions assume they are called once per move, right after the
//! placement. They are not a general "does anyone have a line" scan.

use smallvec::SmallVec;

use crate::core::{Board, Direction, Mark, Position};

/// Cells of a winning run, ordered from one end to the other.
///
/// Inline capacity covers the common thresholds without allocating.
pub type WinningRun = SmallVec<[Position; 8]>;

/// Count cells holding `mark` stepping away from `from` along `direction`,
/// not counting `from` itself. Stops after `limit` steps.
fn extent(board: &Board, from: Position, mark: Mark, direction: Direction, limit: usize) -> usize {
    (1..=limit)
        .take_while(|&step| {
            from.offset(direction, step as isize)
                .is_some_and(|pos| board.has_mark(pos, mark))
        })
        .count()
}

/// Cells on each side of `last` along `axis`: (negative side, positive side).
fn span(board: &Board, last: Position, mark: Mark, axis: Direction, marks_to_win: usize) -> (usize, usize) {
    let reach = marks_to_win.saturating_sub(1);
    (
        extent(board, last, mark, axis.reversed(), reach),
        extent(board, last, mark, axis, reach),
    )
}

/// Check if placing `mark` at `last` completed a run of `marks_to_win`.
///
/// `board` is the board *after* the placement. Returns false if `last` does
/// not hold `mark`. When `marks_to_win` exceeds the board size no run can be
/// long enough and this always returns false.
///
/// ```
/// use mnk_game::core::{Board, Mark, Position};
/// use mnk_game::rules::detect_win;
///
/// let board: Board = "XXX/OO./...".parse().unwrap();
/// assert!(detect_win(&board, Position::new(0, 2), Mark::X, 3));
/// assert!(!detect_win(&board, Position::new(1, 1), Mark::O, 3));
/// ```
#[must_use]
pub fn detect_win(board: &Board, last: Position, mark: Mark, marks_to_win: usize) -> bool {
    if !board.has_mark(last, mark) {
        return false;
    }

    Direction::AXES.iter().any(|&axis| {
        let (back, forward) = span(board, last, mark, axis, marks_to_win);
        1 + back + forward >= marks_to_win
    })
}

/// Find the winning run through `last`, if the placement completed one.
///
/// Agrees with [`detect_win`]: returns `Some` exactly when it returns true.
/// Axes are tried horizontal, vertical, diagonal, anti-diagonal; the first
/// winning one is returned. The run extends at most `marks_to_win - 1` cells
/// to either side of `last`, so a longer line is reported only in part.
#[must_use]
pub fn winning_run(board: &Board, last: Position, mark: Mark, marks_to_win: usize) -> Option<WinningRun> {
    if !board.has_mark(last, mark) {
        return None;
    }

    Direction::AXES.iter().find_map(|&axis| {
        let (back, forward) = span(board, last, mark, axis, marks_to_win);
        if 1 + back + forward < marks_to_win {
            return None;
        }
        let run = (-(back as isize)..=forward as isize)
            .filter_map(|step| last.offset(axis, step))
            .collect();
        Some(run)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_horizontal() {
        let b = board("...../.XXX./...../...../.....");
        assert!(detect_win(&b, Position::new(1, 2), Mark::X, 3));
        assert!(!detect_win(&b, Position::new(1, 2), Mark::X, 4));
    }

    #[test]
    fn test_vertical() {
        let b = board("O..../O..../O..../O..../.....");
        assert!(detect_win(&b, Position::new(0, 0), Mark::O, 4));
        assert!(detect_win(&b, Position::new(3, 0), Mark::O, 4));
        assert!(!detect_win(&b, Position::new(3, 0), Mark::O, 5));
    }

    #[test]
    fn test_diagonal() {
        let b = board("X..../.X.../..X../...X./.....");
        assert!(detect_win(&b, Position::new(2, 2), Mark::X, 4));
        assert!(detect_win(&b, Position::new(3, 3), Mark::X, 4));
    }

    #[test]
    fn test_anti_diagonal() {
        let b = board("....O/...O./..O../...../.....");
        assert!(detect_win(&b, Position::new(0, 4), Mark::O, 3));
        assert!(detect_win(&b, Position::new(2, 2), Mark::O, 3));
        assert!(!detect_win(&b, Position::new(2, 2), Mark::O, 4));
    }

    #[test]
    fn test_middle_placement_joins_both_sides() {
        // Last move at column 2 bridges XX_XX.
        let b = board("XXXXX/...../...../...../.....");
        assert!(detect_win(&b, Position::new(0, 2), Mark::X, 5));
    }

    #[test]
    fn test_gap_breaks_run() {
        let b = board("XX.XX/...../...../...../.....");
        assert!(!detect_win(&b, Position::new(0, 1), Mark::X, 3));
        assert!(!detect_win(&b, Position::new(0, 3), Mark::X, 3));
    }

    #[test]
    fn test_opponent_breaks_run() {
        let b = board("XXOXX/...../...../...../.....");
        assert!(!detect_win(&b, Position::new(0, 4), Mark::X, 3));
    }

    #[test]
    fn test_run_longer_than_needed_wins() {
        let b = board("OOOOOO/....../....../....../....../......");
        for col in 0..6 {
            assert!(detect_win(&b, Position::new(0, col), Mark::O, 4));
        }
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // Row 0 ends with XX, row 1 starts with X. Wrapping would see 3.
        let b = board("...XX/X..../...../...../.....");
        assert!(!detect_win(&b, Position::new(1, 0), Mark::X, 3));
        assert!(!detect_win(&b, Position::new(0, 4), Mark::X, 3));
    }

    #[test]
    fn test_corners() {
        let b = board("X.X/.X./X.X");
        assert!(detect_win(&b, Position::new(0, 0), Mark::X, 3));
        assert!(detect_win(&b, Position::new(0, 2), Mark::X, 3));
        assert!(detect_win(&b, Position::new(2, 0), Mark::X, 3));
        assert!(detect_win(&b, Position::new(2, 2), Mark::X, 3));
    }

    #[test]
    fn test_threshold_above_board_size() {
        let b = board("XXXXX/XXXXX/XXXXX/XXXXX/XXXXX");
        for (pos, _) in b.cells() {
            assert!(!detect_win(&b, pos, Mark::X, 6));
        }
    }

    #[test]
    fn test_wrong_mark_at_last() {
        let b = board("XXX/.../...");
        assert!(!detect_win(&b, Position::new(0, 0), Mark::O, 3));
        assert!(!detect_win(&b, Position::new(1, 1), Mark::X, 3));
        assert!(!detect_win(&b, Position::new(9, 9), Mark::X, 3));
    }

    #[test]
    fn test_winning_run_positions() {
        let b = board("...../...O./..O../.O.../.....");
        let run = winning_run(&b, Position::new(2, 2), Mark::O, 3).unwrap();

        assert_eq!(
            run.as_slice(),
            &[Position::new(1, 3), Position::new(2, 2), Position::new(3, 1)]
        );
    }

    #[test]
    fn test_winning_run_capped_at_reach() {
        let b = board("XXXXXXX/......./......./......./......./......./.......");
        let run = winning_run(&b, Position::new(0, 0), Mark::X, 3).unwrap();
        assert_eq!(run.len(), 3);
        assert_eq!(run[0], Position::new(0, 0));
        assert_eq!(run[2], Position::new(0, 2));
    }

    #[test]
    fn test_winning_run_agrees_with_detect_win() {
        let b = board("XOX.O/OXXO./XOX../.O.X./O...X");
        for m in 3..=6 {
            for (pos, cell) in b.cells() {
                if let Some(mark) = cell.mark() {
                    assert_eq!(
                        detect_win(&b, pos, mark, m),
                        winning_run(&b, pos, mark, m).is_some(),
                        "disagreement at {pos} for M={m}"
                    );
                }
            }
        }
    }
}
