//! Essay grader panel: submission, result display and past attempts.

mod state;
mod update;

pub use state::{
    EssayInputMode, EssayState, EssaySubmission, ScoreBand, attempt_titles, past_attempts_for,
};
pub(crate) use update::refresh_attempts;
pub use update::{handle_command, handle_essay_event};
