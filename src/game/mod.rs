//! Game lifecycle and presentation read-out.
//!
//! - `Game`: Owns one session's state and drives it through
//!   `start_game`, `select_card`, and scheduled resolution
//! - `Status`: The human-readable status line
//! - `Snapshot`: Everything a presentation layer displays, in table order

mod lifecycle;
mod snapshot;
mod status;

pub use lifecycle::Game;
pub use snapshot::{CardView, Snapshot};
pub use status::Status;
