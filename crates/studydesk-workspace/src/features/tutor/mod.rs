//! Guided tutor sessions: opening question, graded answers, reset.

mod state;
mod update;

pub use state::TutorState;
pub(crate) use update::{confirm_reset, start};
pub use update::{handle_tutor_event, reply, request_reset};
