//! Character-by-character reveal of AI replies.
//!
//! A run appends an empty AI turn, then each scheduled tick moves one
//! character from the pending queue into that turn. Runs are tagged with
//! the store generation so a tick after a session change writes nothing.

mod state;
mod update;

pub use state::{RevealId, RevealRun, RevealState};
pub use update::{on_tick, start_reveal};
