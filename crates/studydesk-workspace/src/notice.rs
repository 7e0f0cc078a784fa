//! Notifications published to the presentation layer.

use std::fmt;

use studydesk_types::DocumentId;

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The message list changed and should be redrawn.
    MessagesChanged,
    /// A user-visible error.
    Alert(String),
    /// A destructive action is waiting for `UiEvent::ConfirmationAnswered`.
    ConfirmationRequested(Confirmation),
    Navigate(Route),
    /// A command was refused before any state changed.
    InputRejected(RejectReason),
}

/// Destructive actions that need an explicit yes from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    ResetTutor { document: DocumentId },
    DeleteDocument { document: DocumentId, filename: String },
}

impl Confirmation {
    pub fn prompt(&self) -> String {
        match self {
            Confirmation::ResetTutor { .. } => {
                "Reset the tutor session? All tutor progress for this document will be lost."
                    .to_string()
            }
            Confirmation::DeleteDocument { filename, .. } => {
                format!("Delete \"{filename}\"? This cannot be undone.")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    QuizPlayer { quiz_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NoDocument,
    UnknownDocument,
    NotConversational,
    NotTutorMode,
    EmptyInput,
    /// A reveal, send or history load is still in progress.
    Busy,
    MissingFile,
    EmptyEssay,
    NothingToConfirm,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::NoDocument => "no document selected",
            RejectReason::UnknownDocument => "unknown document",
            RejectReason::NotConversational => "the current mode does not take messages",
            RejectReason::NotTutorMode => "only available in tutor mode",
            RejectReason::EmptyInput => "message is empty",
            RejectReason::Busy => "still working on the previous request",
            RejectReason::MissingFile => "no essay file selected",
            RejectReason::EmptyEssay => "essay text is empty",
            RejectReason::NothingToConfirm => "nothing is waiting for confirmation",
        };
        f.write_str(text)
    }
}
