//! Workspace state composition.
//!
//! ```text
//! WorkspaceState
//! ├── documents: DocumentsState   (cached list, selection, category filter)
//! ├── mode: Mode                  (summary | chat | tutor | grader)
//! ├── store: MessageStore         (turns of the active session, generation)
//! ├── reveal: RevealState         (at most one reveal run)
//! ├── tutor: TutorState           (finished flag)
//! ├── essay: EssayState           (grader panel)
//! ├── pending_confirmation        (destructive action awaiting an answer)
//! ├── task_seq: TaskSeq
//! └── tasks: Tasks
//! ```

use studydesk_types::Document;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskKind, TaskSeq, TaskStarted, Tasks};
use crate::effects::UiEffect;
use crate::features::documents::DocumentsState;
use crate::features::essay::EssayState;
use crate::features::messages::MessageStore;
use crate::features::mode::Mode;
use crate::features::reveal::RevealState;
use crate::features::tutor::TutorState;
use crate::notice::Confirmation;

#[derive(Debug, Default)]
pub struct WorkspaceState {
    pub documents: DocumentsState,
    pub mode: Mode,
    pub store: MessageStore,
    pub reveal: RevealState,
    pub tutor: TutorState,
    pub essay: EssayState,
    pub pending_confirmation: Option<Confirmation>,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.documents.selected_document()
    }

    /// True while the history of the active mode is being fetched.
    pub fn is_history_loading(&self) -> bool {
        self.tasks.is_running(TaskKind::History)
    }

    /// True while a chat question, tutor start or tutor answer is in flight.
    pub fn is_sending(&self) -> bool {
        self.tasks.is_running(TaskKind::ChatSend)
            || self.tasks.is_running(TaskKind::TutorStart)
            || self.tasks.is_running(TaskKind::TutorReply)
    }

    pub fn is_revealing(&self) -> bool {
        self.reveal.is_revealing()
    }

    pub fn is_resetting_tutor(&self) -> bool {
        self.tasks.is_running(TaskKind::TutorReset)
    }

    pub fn is_grading(&self) -> bool {
        self.tasks.is_running(TaskKind::EssayResult)
    }

    pub fn is_generating_quiz(&self) -> bool {
        self.tasks.is_running(TaskKind::QuizGenerate)
    }

    /// New messages are refused while this is true.
    pub fn is_busy(&self) -> bool {
        self.is_revealing()
            || self.is_sending()
            || self.is_history_loading()
            || self.is_resetting_tutor()
    }

    /// No task is running and no reveal is active.
    pub fn is_idle(&self) -> bool {
        !self.tasks.is_any_running() && !self.reveal.is_revealing()
    }

    /// Allocates a task id, marks it active for `kind` and cancels the task
    /// it supersedes.
    pub(crate) fn begin_task(&mut self, kind: TaskKind, effects: &mut Vec<UiEffect>) -> TaskStarted {
        let started = TaskStarted {
            id: self.task_seq.next_id(),
            cancel: Some(CancellationToken::new()),
        };
        if let Some(token) = self.tasks.state_mut(kind).on_started(&started) {
            effects.push(UiEffect::CancelTask {
                kind,
                token: Some(token),
            });
        }
        started
    }

    pub(crate) fn cancel_tasks(&mut self, kinds: &[TaskKind], effects: &mut Vec<UiEffect>) {
        for &kind in kinds {
            let state = self.tasks.state_mut(kind);
            if !state.is_running() {
                continue;
            }
            let token = state.clear();
            tracing::debug!(?kind, "cancelling task");
            effects.push(UiEffect::CancelTask { kind, token });
        }
    }

    /// Starts a fresh conversation session: new generation, empty store,
    /// no reveal, finished flag cleared, conversation tasks cancelled.
    pub(crate) fn begin_session(&mut self, effects: &mut Vec<UiEffect>) {
        let generation = self.store.begin_generation();
        self.reveal.cancel();
        self.tutor.finished = false;
        self.cancel_tasks(TaskKind::CONVERSATION, effects);
        tracing::debug!(generation = generation.0, "session started");
    }
}
