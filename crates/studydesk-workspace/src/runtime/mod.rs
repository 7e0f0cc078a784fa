//! Workspace runtime: owns state, runs the reducer, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers and timers send `UiEvent`s directly to `inbox_tx`
//! - The owner of the runtime pulls them with `next_event` and feeds them
//!   back through `dispatch`
//! - Notices for the presentation layer go out on a broadcast channel

mod handlers;
mod inbox;


use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use inbox::{UiEventReceiver, UiEventSender};
use studydesk_api::StudyApi;
use tokio::sync::{broadcast, mpsc};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::notice::Notice;
use crate::state::WorkspaceState;
use crate::update;

/// Default delay between two revealed characters.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(20);

/// Capacity of the notice channel. Slow subscribers lose the oldest notices.
const NOTICE_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub reveal_interval: Duration,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
        }
    }
}

/// Drives one study workspace against a `StudyApi`.
pub struct WorkspaceRuntime {
    /// Workspace state; mutated only through `dispatch`.
    pub state: WorkspaceState,
    api: Arc<dyn StudyApi>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - drained by `next_event`.
    inbox_rx: UiEventReceiver,
    notices: broadcast::Sender<Notice>,
    options: RuntimeOptions,
}

impl WorkspaceRuntime {
    pub fn new(api: Arc<dyn StudyApi>, options: RuntimeOptions) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        Self {
            state: WorkspaceState::new(),
            api,
            inbox_tx,
            inbox_rx,
            notices,
            options,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.notices.subscribe()
    }

    /// Runs one event through the reducer and executes its effects.
    ///
    /// Publishes `Notice::MessagesChanged` when the message store changed.
    pub fn dispatch(&mut self, event: UiEvent) {
        let revision = self.state.store.revision();
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
        if self.state.store.revision() != revision {
            self.publish(Notice::MessagesChanged);
        }
    }

    /// Waits for the next event from a handler or timer.
    pub async fn next_event(&mut self) -> Option<UiEvent> {
        self.inbox_rx.recv().await
    }

    /// Waits for one inbox event and dispatches it.
    pub async fn step(&mut self) -> bool {
        match self.next_event().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Dispatches inbox events until no task is running and no reveal is
    /// active.
    pub async fn run_until_idle(&mut self) {
        while !self.state.is_idle() {
            if !self.step().await {
                break;
            }
        }
    }

    fn publish(&self, notice: Notice) {
        tracing::debug!(?notice, "notice");
        // No subscribers is fine.
        let _ = self.notices.send(notice);
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns `fut` for `task`, reporting through `UiEvent::TaskCompleted`.
    ///
    /// A cancelled task reports nothing.
    fn spawn_task<Fut>(&self, kind: TaskKind, task: TaskStarted, fut: Fut)
    where
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let result = match task.cancel {
                Some(cancel) => tokio::select! {
                    () = cancel.cancelled() => {
                        tracing::debug!(?kind, id = task.id.0, "task cancelled");
                        return;
                    }
                    event = fut => event,
                },
                None => fut.await,
            };
            let completed = TaskCompleted {
                id: task.id,
                result: Box::new(result),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        let api = Arc::clone(&self.api);
        match effect {
            UiEffect::LoadDocuments { task } => {
                self.spawn_task(TaskKind::DocumentList, task, handlers::documents_load(api));
            }
            UiEffect::DeleteDocument { task, document } => {
                self.spawn_task(
                    TaskKind::DocumentDelete,
                    task,
                    handlers::document_delete(api, document),
                );
            }
            UiEffect::GenerateQuiz { task, document } => {
                self.spawn_task(
                    TaskKind::QuizGenerate,
                    task,
                    handlers::quiz_generate(api, document),
                );
            }
            UiEffect::LoadHistory {
                task,
                document,
                kind,
                generation,
            } => {
                self.spawn_task(
                    TaskKind::History,
                    task,
                    handlers::history_load(api, document, kind, generation),
                );
            }
            UiEffect::AskDocument {
                task,
                document,
                question,
                generation,
            } => {
                self.spawn_task(
                    TaskKind::ChatSend,
                    task,
                    handlers::chat_ask(api, document, question, generation),
                );
            }
            UiEffect::StartTutor {
                task,
                document,
                generation,
            } => {
                self.spawn_task(
                    TaskKind::TutorStart,
                    task,
                    handlers::tutor_start(api, document, generation),
                );
            }
            UiEffect::ReplyTutor {
                task,
                document,
                answer,
                generation,
            } => {
                self.spawn_task(
                    TaskKind::TutorReply,
                    task,
                    handlers::tutor_reply(api, document, answer, generation),
                );
            }
            UiEffect::ResetTutor { task, document } => {
                self.spawn_task(
                    TaskKind::TutorReset,
                    task,
                    handlers::tutor_reset(api, document),
                );
            }
            UiEffect::GradeEssay {
                task,
                document,
                submission,
            } => {
                self.spawn_task(
                    TaskKind::EssayResult,
                    task,
                    handlers::essay_grade(api, document, submission),
                );
            }
            UiEffect::LoadEssayDetail { task, essay } => {
                self.spawn_task(
                    TaskKind::EssayResult,
                    task,
                    handlers::essay_detail_load(api, essay),
                );
            }
            UiEffect::LoadEssays { task, document } => {
                self.spawn_task(TaskKind::EssayList, task, handlers::essays_load(api, document));
            }

            UiEffect::ScheduleRevealTick { run } => {
                let tx = self.inbox_tx.clone();
                let interval = self.options.reveal_interval;
                tokio::spawn(async move {
                    tokio::time::sleep(interval).await;
                    let _ = tx.send(UiEvent::RevealTick { run });
                });
            }

            UiEffect::Notify(notice) => self.publish(notice),

            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }
        }
    }
}
