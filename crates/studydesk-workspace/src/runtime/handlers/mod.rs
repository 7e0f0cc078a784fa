//! Effect handlers.
//!
//! Each handler is a pure async function that performs one backend call and
//! turns the outcome into a `UiEvent`. The runtime does the spawning.

mod conversation;
mod documents;
mod essay;

pub use conversation::{chat_ask, history_load, tutor_reply, tutor_reset, tutor_start};
pub use documents::{document_delete, documents_load, quiz_generate};
pub use essay::{essay_detail_load, essay_grade, essays_load};

/// Formats an error with its context chain on one line.
fn describe(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
