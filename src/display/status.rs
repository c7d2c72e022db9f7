//! Status line for the current game.

use crate::core::{GameState, Status};

use super::names::PlayerNames;

/// Compose the one-line status shown above the board.
///
/// ```
/// use mnk_game::display::{status_message, PlayerNames};
/// use mnk_game::rules::init_game;
///
/// let names = PlayerNames::new("Ada", "Grace");
/// assert_eq!(status_message(&init_game(3), &names), "Ada's turn (X)");
/// ```
#[must_use]
pub fn status_message(state: &GameState, names: &PlayerNames) -> String {
    match (state.status(), state.winner()) {
        (Status::Won, Some(winner)) => format!("🎉 {} ({}) wins!", names.name(winner), winner),
        (Status::Draw, _) => "Game over! It's a draw!".to_string(),
        _ => {
            let turn = state.current_turn();
            format!("{}'s turn ({})", names.name(turn), turn)
        }
    }
}
