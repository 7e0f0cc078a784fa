//! Wire types shared between the study backend client and the workspace.
//!
//! Everything here mirrors the JSON the backend speaks. Presentation types
//! (turns, modes, notices) live in `studydesk-workspace`.

mod conversation;
mod document;
mod essay;
mod timestamp;

pub use conversation::{BackendRole, ChatAnswer, HistoryKind, RawTurn, TutorOpening, TutorReply};
pub use document::{Document, DocumentId, QuizCreated};
pub use essay::{EssayFile, EssayId, EssayRecord, GradedEssay};
