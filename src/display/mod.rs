//! Presentation helpers: player names and the status line.
//!
//! The engine only knows marks. Hosts map them to names here; the board's
//! own text form is its `Display` impl.

mod names;
mod status;

pub use names::PlayerNames;
pub use status::status_message;
