//! Session implementation.

use tracing::debug;

use crate::core::{GameConfig, GameState, Mark};
use crate::display::{status_message, PlayerNames};
use crate::error::{ConfigError, MoveError};
use crate::rules::{apply_move, try_apply_move};

/// Owner of the live game.
///
/// Holds the configuration, the current state and the player names. Every
/// change replaces `state` with a new value; nothing is edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    config: GameConfig,
    state: GameState,
    names: PlayerNames,
}

impl Session {
    /// Start a session with a fresh game for `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config);
        Self {
            config: *state.config(),
            state,
            names: PlayerNames::default(),
        }
    }

    /// Set the player names.
    #[must_use]
    pub fn with_names(mut self, names: PlayerNames) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Play the current player's mark. Illegal moves leave the game as is.
    pub fn play(&mut self, row: usize, col: usize) -> &GameState {
        self.state = apply_move(&self.state, row, col);
        &self.state
    }

    /// Play the current player's mark, reporting why an illegal move was
    /// refused. The game is unchanged on error.
    pub fn try_play(&mut self, row: usize, col: usize) -> Result<&GameState, MoveError> {
        self.state = try_apply_move(&self.state, row, col)?;
        Ok(&self.state)
    }

    /// Throw away the current game and start over with the same settings.
    pub fn reset(&mut self) -> &GameState {
        debug!(config = %self.config, "game reset");
        self.state = GameState::new(self.config);
        &self.state
    }

    /// Validate and apply new settings, starting a fresh game.
    ///
    /// On error the session, including the game in progress, is untouched.
    pub fn reconfigure(&mut self, board_size: usize, marks_to_win: usize) -> Result<&GameState, ConfigError> {
        let config = GameConfig::new(board_size, marks_to_win)?;
        Ok(self.apply_config(config))
    }

    /// Change the board size, clamping the settings into range.
    ///
    /// Always starts a fresh game.
    pub fn set_board_size(&mut self, board_size: usize) -> &GameState {
        self.apply_config(GameConfig::clamped(board_size, self.config.marks_to_win))
    }

    /// Change the win threshold, clamping it into `[3, board_size]`.
    ///
    /// Always starts a fresh game.
    pub fn set_marks_to_win(&mut self, marks_to_win: usize) -> &GameState {
        self.apply_config(GameConfig::clamped(self.config.board_size, marks_to_win))
    }

    /// Rename a player. An empty name resets it to the default.
    pub fn set_player_name(&mut self, mark: Mark, name: impl Into<String>) {
        self.names.set(mark, name);
    }

    /// Status line for the current game.
    #[must_use]
    pub fn status_message(&self) -> String {
        status_message(&self.state, &self.names)
    }

    fn apply_config(&mut self, config: GameConfig) -> &GameState {
        self.config = config;
        self.reset()
    }
}
