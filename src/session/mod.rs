//! Host-side owner of the live game.
//!
//! The rules engine is stateless. Something still has to hold the current
//! `GameState`, the configuration it was built from and the player names,
//! and swap in the next state after each move. `Session` is that owner:
//! an event loop, UI binding or test harness keeps one and calls into it.
//!
//! ```
//! use mnk_game::session::Session;
//! use mnk_game::core::Status;
//!
//! let mut session = Session::default();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     session.play(row, col);
//! }
//! assert_eq!(session.state().status(), Status::Won);
//! assert_eq!(session.status_message(), "🎉 Player 1 (X) wins!");
//! ```

mod host;

pub use host::Session;
