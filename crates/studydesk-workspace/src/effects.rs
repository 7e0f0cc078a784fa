//! Workspace effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent backend calls, timers and notifications only.
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`;
//! the runtime calls `cancel()` on the provided token.

use studydesk_types::{DocumentId, EssayId, HistoryKind};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskKind, TaskStarted};
use crate::features::essay::EssaySubmission;
use crate::features::messages::Generation;
use crate::features::reveal::RevealId;
use crate::notice::{Notice, RejectReason};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    LoadDocuments {
        task: TaskStarted,
    },
    DeleteDocument {
        task: TaskStarted,
        document: DocumentId,
    },
    GenerateQuiz {
        task: TaskStarted,
        document: DocumentId,
    },
    LoadHistory {
        task: TaskStarted,
        document: DocumentId,
        kind: HistoryKind,
        generation: Generation,
    },
    AskDocument {
        task: TaskStarted,
        document: DocumentId,
        question: String,
        generation: Generation,
    },
    StartTutor {
        task: TaskStarted,
        document: DocumentId,
        generation: Generation,
    },
    ReplyTutor {
        task: TaskStarted,
        document: DocumentId,
        answer: String,
        generation: Generation,
    },
    ResetTutor {
        task: TaskStarted,
        document: DocumentId,
    },
    GradeEssay {
        task: TaskStarted,
        document: DocumentId,
        submission: EssaySubmission,
    },
    LoadEssayDetail {
        task: TaskStarted,
        essay: EssayId,
    },
    LoadEssays {
        task: TaskStarted,
        document: DocumentId,
    },

    /// Deliver `UiEvent::RevealTick` for `run` after one reveal interval.
    ScheduleRevealTick {
        run: RevealId,
    },

    Notify(Notice),

    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}

impl UiEffect {
    pub fn reject(reason: RejectReason) -> Self {
        UiEffect::Notify(Notice::InputRejected(reason))
    }

    pub fn alert(message: impl Into<String>) -> Self {
        UiEffect::Notify(Notice::Alert(message.into()))
    }
}
