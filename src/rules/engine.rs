//! Move application: the state transition function.
//!
//! `apply_move` takes a state and a coordinate and returns the next state.
//! It never mutates its input. Illegal moves (game over, off the board,
//! occupied cell) return the input unchanged; `try_apply_move` reports why.
//!
//! ## Transition
//!
//! 1. Place the current player's mark on a new board.
//! 2. Check for a win through that cell.
//! 3. Only if nobody won, check for a full board (draw).
//! 4. Hand the turn to the opponent only if the game is still being played.

use tracing::{debug, trace};

use super::draw::detect_draw;
use super::win::detect_win;
use crate::core::{Cell, GameState, Position, Status};
use crate::error::MoveError;

/// Check whether the current player may play at `(row, col)`.
///
/// Checks in order: game over, off the board, occupied.
pub fn validate_move(state: &GameState, row: usize, col: usize) -> Result<Position, MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameOver {
            status: state.status(),
        });
    }

    let pos = Position::new(row, col);
    match state.board().get(pos) {
        None => Err(MoveError::OutOfBounds {
            row,
            col,
            size: state.board().size(),
        }),
        Some(Cell::Empty) => Ok(pos),
        Some(cell) => Err(MoveError::Occupied { row, col, cell }),
    }
}

/// Play the current player's mark at `(row, col)`, or say why not.
pub fn try_apply_move(state: &GameState, row: usize, col: usize) -> Result<GameState, MoveError> {
    let pos = validate_move(state, row, col)?;
    let mark = state.current_turn();
    let config = *state.config();

    let board = state
        .board()
        .place(pos, mark)
        .ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: state.board().size(),
        })?;

    let (status, winner) = if detect_win(&board, pos, mark, config.marks_to_win) {
        (Status::Won, Some(mark))
    } else if detect_draw(&board) {
        (Status::Draw, None)
    } else {
        (Status::Playing, None)
    };

    // The turn stays with the deciding player once the game is over.
    let next_turn = if status.is_terminal() { mark } else { mark.opponent() };

    trace!(%mark, %pos, %status, "move applied");
    Ok(GameState::from_parts(config, board, next_turn, status, winner))
}

/// Play the current player's mark at `(row, col)`.
///
/// Illegal moves are no-ops: the returned state equals the input.
///
/// ```
/// use mnk_game::rules::{apply_move, init_game};
/// use mnk_game::core::{Mark, Status};
///
/// let state = init_game(3);
/// let next = apply_move(&state, 1, 1);
/// assert_eq!(next.current_turn(), Mark::O);
///
/// // Occupied: nothing happens.
/// assert_eq!(apply_move(&next, 1, 1), next);
/// assert_eq!(next.status(), Status::Playing);
/// ```
#[must_use]
pub fn apply_move(state: &GameState, row: usize, col: usize) -> GameState {
    match try_apply_move(state, row, col) {
        Ok(next) => next,
        Err(err) => {
            debug!(%err, "move ignored");
            state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Mark};
    use crate::rules::init_game;

    fn play(state: &GameState, moves: &[(usize, usize)]) -> GameState {
        moves
            .iter()
            .fold(state.clone(), |s, &(row, col)| apply_move(&s, row, col))
    }

    #[test]
    fn test_first_move() {
        let state = init_game(3);
        let next = apply_move(&state, 0, 0);

        assert_eq!(next.board().get(Position::new(0, 0)), Some(Cell::X));
        assert_eq!(next.current_turn(), Mark::O);
        assert_eq!(next.status(), Status::Playing);
        assert_eq!(next.winner(), None);

        // Input is untouched.
        assert_eq!(state.board().empty_count(), 9);
        assert_eq!(state.current_turn(), Mark::X);
    }

    #[test]
    fn test_turns_alternate() {
        let state = play(&init_game(4), &[(0, 0), (1, 1), (2, 2)]);

        assert_eq!(state.board().count(Mark::X), 2);
        assert_eq!(state.board().count(Mark::O), 1);
        assert_eq!(state.board().get(Position::new(1, 1)), Some(Cell::O));
        assert_eq!(state.current_turn(), Mark::O);
    }

    #[test]
    fn test_occupied_is_noop() {
        let state = apply_move(&init_game(3), 1, 1);
        assert_eq!(apply_move(&state, 1, 1), state);
        assert_eq!(
            try_apply_move(&state, 1, 1),
            Err(MoveError::Occupied { row: 1, col: 1, cell: Cell::X })
        );
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let state = init_game(3);
        assert_eq!(apply_move(&state, 3, 0), state);
        assert_eq!(apply_move(&state, 0, usize::MAX), state);
        assert_eq!(
            validate_move(&state, 0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3, size: 3 })
        );
    }

    #[test]
    fn test_terminal_is_noop() {
        let won = play(&init_game(3), &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(won.status(), Status::Won);

        assert_eq!(apply_move(&won, 2, 2), won);
        assert_eq!(
            validate_move(&won, 2, 2),
            Err(MoveError::GameOver { status: Status::Won })
        );
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let won = play(&init_game(3), &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(
            validate_move(&won, 7, 7),
            Err(MoveError::GameOver { status: Status::Won })
        );
    }

    #[test]
    fn test_win_freezes_turn() {
        let won = play(&init_game(3), &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

        assert_eq!(won.winner(), Some(Mark::X));
        assert_eq!(won.current_turn(), Mark::X);
    }

    #[test]
    fn test_o_can_win() {
        let won = play(
            &init_game(3),
            &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)],
        );

        assert_eq!(won.status(), Status::Won);
        assert_eq!(won.winner(), Some(Mark::O));
        assert_eq!(won.current_turn(), Mark::O);
    }

    #[test]
    fn test_draw_freezes_turn() {
        let drawn = play(
            &init_game(3),
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(drawn.status(), Status::Draw);
        assert_eq!(drawn.winner(), None);
        assert_eq!(drawn.current_turn(), Mark::X);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let state = play(
            &init_game(3),
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert!(state.board().is_full());
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.winner(), Some(Mark::X));
    }

    #[test]
    fn test_uses_configured_threshold() {
        let state = GameState::new(GameConfig::unchecked(5, 4));
        let state = play(&state, &[(0, 0), (4, 0), (0, 1), (4, 1), (0, 2)]);
        assert_eq!(state.status(), Status::Playing);

        let state = play(&state, &[(4, 2), (0, 3)]);
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.winner(), Some(Mark::X));
    }

    #[test]
    fn test_config_carried_through() {
        let config = GameConfig::unchecked(6, 5);
        let state = apply_move(&GameState::new(config), 2, 3);
        assert_eq!(*state.config(), config);
    }
}
