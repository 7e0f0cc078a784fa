//! Conversation mode of the selected document and the input send path.

mod state;
mod update;

pub use state::Mode;
pub use update::{handle_history_event, submit_input, switch_mode};
