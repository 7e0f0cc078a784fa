//! Workspace events.
//!
//! Every input to the reducer is a `UiEvent`: user intents issued by the
//! presentation layer, timer ticks and completed backend calls.

use studydesk_types::{
    Document, DocumentId, EssayFile, EssayId, EssayRecord, GradedEssay, HistoryKind,
    QuizCreated, RawTurn, TutorReply,
};

use crate::common::{TaskCompleted, TaskKind};
use crate::features::essay::EssayInputMode;
use crate::features::messages::Generation;
use crate::features::mode::Mode;
use crate::features::reveal::RevealId;

#[derive(Debug)]
pub enum UiEvent {
    // User intents
    RefreshDocuments,
    SelectDocument(DocumentId),
    ClearSelection,
    SetCategoryFilter(Option<String>),
    RequestDeleteDocument(DocumentId),
    GenerateQuiz,
    SwitchMode(Mode),
    SubmitInput(String),
    RequestTutorReset,
    ConfirmationAnswered { accepted: bool },
    Essay(EssayCommand),

    // Timers
    RevealTick { run: RevealId },

    // Async results
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    Documents(DocumentsUiEvent),
    History(HistoryUiEvent),
    Chat(ChatUiEvent),
    Tutor(TutorUiEvent),
    EssayResult(EssayUiEvent),
}

/// Commands of the essay grader panel.
#[derive(Debug)]
pub enum EssayCommand {
    SetInputMode(EssayInputMode),
    SetText(String),
    SelectFile(Option<EssayFile>),
    Submit,
    ViewAttempt(EssayId),
    RefreshAttempts,
    Reset,
}

#[derive(Debug)]
pub enum DocumentsUiEvent {
    Loaded(Vec<Document>),
    LoadFailed { error: String },
    Deleted(DocumentId),
    DeleteFailed { document: DocumentId, error: String },
    QuizCreated(QuizCreated),
    QuizFailed { error: String },
}

#[derive(Debug)]
pub enum HistoryUiEvent {
    Loaded {
        document: DocumentId,
        kind: HistoryKind,
        generation: Generation,
        turns: Vec<RawTurn>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug)]
pub enum ChatUiEvent {
    Answered {
        generation: Generation,
        answer: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug)]
pub enum TutorUiEvent {
    Started {
        generation: Generation,
        opening: String,
    },
    StartFailed {
        error: String,
    },
    Replied {
        generation: Generation,
        reply: TutorReply,
    },
    ReplyFailed {
        error: String,
    },
    ResetDone {
        document: DocumentId,
    },
    ResetFailed {
        error: String,
    },
}

#[derive(Debug)]
pub enum EssayUiEvent {
    Graded(GradedEssay),
    GradeFailed {
        error: String,
    },
    DetailLoaded(GradedEssay),
    DetailFailed {
        error: String,
    },
    AttemptsLoaded {
        document: DocumentId,
        essays: Vec<EssayRecord>,
    },
    AttemptsFailed {
        error: String,
    },
}
