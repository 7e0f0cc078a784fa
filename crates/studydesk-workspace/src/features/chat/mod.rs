//! Free-form questions about the selected document.

mod update;

pub use update::{handle_chat_event, send};
