//! Player display names.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Display names for the two marks.
///
/// Empty names fall back to "Player 1" (X) and "Player 2" (O).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Create names for both players. Empty names use the defaults.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        let mut names = Self::default();
        names.set(Mark::X, x);
        names.set(Mark::O, o);
        names
    }

    /// Default name for a mark.
    #[must_use]
    pub fn default_name(mark: Mark) -> &'static str {
        match mark {
            Mark::X => "Player 1",
            Mark::O => "Player 2",
        }
    }

    /// Get the name shown for a mark.
    #[must_use]
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Rename a player. An empty name resets it to the default.
    pub fn set(&mut self, mark: Mark, name: impl Into<String>) {
        let mut name = name.into();
        if name.is_empty() {
            name = Self::default_name(mark).to_string();
        }
        match mark {
            Mark::X => self.x = name,
            Mark::O => self.o = name,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: Self::default_name(Mark::X).to_string(),
            o: Self::default_name(Mark::O).to_string(),
        }
    }
}
