//! Game initialization and reconfiguration.
//!
//! Both go through [`GameState::new`]; there is no other way to get a fresh
//! game. Reconfiguring always throws away the game in progress.

use tracing::debug;

use crate::core::{GameConfig, GameState};

/// Start a game on an N×N board with the standard three-in-a-row threshold.
#[must_use]
pub fn init_game(board_size: usize) -> GameState {
    GameState::new(GameConfig::standard(board_size))
}

/// Discard any game in progress and start over with new settings.
///
/// The board is shaped by `board_size` alone; `marks_to_win` is carried in
/// the state's configuration for win detection on later moves. Values are
/// not validated here (see [`GameConfig::new`] for the checked boundary);
/// `marks_to_win > board_size` gives a game that always ends in a draw, and
/// `board_size` saturates at [`MAX_BOARD_SIZE`](crate::core::MAX_BOARD_SIZE).
#[must_use]
pub fn reconfigure(board_size: usize, marks_to_win: usize) -> GameState {
    let config = GameConfig::unchecked(board_size, marks_to_win);
    debug!(%config, "reconfigured");
    GameState::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Mark, Position, Status, MAX_BOARD_SIZE};
    use crate::rules::apply_move;

    #[test]
    fn test_init_game() {
        let state = init_game(7);

        assert_eq!(state.board().size(), 7);
        assert_eq!(state.board().empty_count(), 49);
        assert_eq!(state.current_turn(), Mark::X);
        assert_eq!(state.status(), Status::Playing);
        assert_eq!(state.winner(), None);
        assert_eq!(state.marks_to_win(), 3);
    }

    #[test]
    fn test_reconfigure_fresh() {
        let state = reconfigure(8, 5);

        assert_eq!(state.board_size(), 8);
        assert_eq!(state.marks_to_win(), 5);
        assert_eq!(state.board().empty_count(), 64);
        assert_eq!(state.current_turn(), Mark::X);
        assert_eq!(state.status(), Status::Playing);
    }

    #[test]
    fn test_reconfigure_matches_init_board() {
        assert_eq!(reconfigure(4, 4).board(), init_game(4).board());
        assert_eq!(reconfigure(3, 3), init_game(3));
    }

    #[test]
    fn test_reconfigure_idempotent() {
        assert_eq!(reconfigure(6, 4), reconfigure(6, 4));
    }

    #[test]
    fn test_reconfigure_forfeits_progress() {
        let in_progress = apply_move(&apply_move(&init_game(3), 0, 0), 1, 1);
        assert_eq!(in_progress.board().empty_count(), 7);

        // Same settings still start over.
        let fresh = reconfigure(in_progress.board_size(), in_progress.marks_to_win());
        assert_eq!(fresh, init_game(3));
    }

    #[test]
    fn test_reconfigure_tolerates_unwinnable() {
        let state = reconfigure(5, 6);
        assert_eq!(state.marks_to_win(), 6);
        assert_eq!(state.status(), Status::Playing);
    }

    #[test]
    fn test_oversized_reconfigure_is_playable() {
        let state = reconfigure(1 << 32, 3);
        assert_eq!(state.board_size(), MAX_BOARD_SIZE);
        assert_eq!(state.board().row(0).count(), MAX_BOARD_SIZE);
        assert!(!state.board().is_full());

        let next = apply_move(&state, 0, 0);
        assert_eq!(next.board().get(Position::new(0, 0)), Some(Cell::X));
        assert_eq!(next.current_turn(), Mark::O);

        assert_eq!(init_game(usize::MAX).board_size(), MAX_BOARD_SIZE);
    }
}
