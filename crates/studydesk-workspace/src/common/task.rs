use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    DocumentList,
    DocumentDelete,
    QuizGenerate,
    History,
    ChatSend,
    TutorStart,
    TutorReply,
    TutorReset,
    EssayResult,
    EssayList,
}

impl TaskKind {
    /// Tasks whose results belong to the active (document, mode) session.
    pub const CONVERSATION: &'static [TaskKind] = &[
        TaskKind::History,
        TaskKind::ChatSend,
        TaskKind::TutorStart,
        TaskKind::TutorReply,
        TaskKind::TutorReset,
    ];

    /// Tasks whose results belong to the selected document.
    pub const DOCUMENT_SCOPED: &'static [TaskKind] = &[
        TaskKind::QuizGenerate,
        TaskKind::EssayResult,
        TaskKind::EssayList,
    ];
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in `WorkspaceState`, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Marks `started` as the active task.
    ///
    /// Returns the cancel token of the task it supersedes, if any.
    pub fn on_started(&mut self, started: &TaskStarted) -> Option<CancellationToken> {
        let superseded = self.clear();
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
        superseded
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    /// Forgets the active task, returning its cancel token.
    pub fn clear(&mut self) -> Option<CancellationToken> {
        self.active = None;
        self.cancel.take()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub document_list: TaskState,
    pub document_delete: TaskState,
    pub quiz_generate: TaskState,
    pub history: TaskState,
    pub chat_send: TaskState,
    pub tutor_start: TaskState,
    pub tutor_reply: TaskState,
    pub tutor_reset: TaskState,
    pub essay_result: TaskState,
    pub essay_list: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::DocumentList => &self.document_list,
            TaskKind::DocumentDelete => &self.document_delete,
            TaskKind::QuizGenerate => &self.quiz_generate,
            TaskKind::History => &self.history,
            TaskKind::ChatSend => &self.chat_send,
            TaskKind::TutorStart => &self.tutor_start,
            TaskKind::TutorReply => &self.tutor_reply,
            TaskKind::TutorReset => &self.tutor_reset,
            TaskKind::EssayResult => &self.essay_result,
            TaskKind::EssayList => &self.essay_list,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::DocumentList => &mut self.document_list,
            TaskKind::DocumentDelete => &mut self.document_delete,
            TaskKind::QuizGenerate => &mut self.quiz_generate,
            TaskKind::History => &mut self.history,
            TaskKind::ChatSend => &mut self.chat_send,
            TaskKind::TutorStart => &mut self.tutor_start,
            TaskKind::TutorReply => &mut self.tutor_reply,
            TaskKind::TutorReset => &mut self.tutor_reset,
            TaskKind::EssayResult => &mut self.essay_result,
            TaskKind::EssayList => &mut self.essay_list,
        }
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.state(kind).is_running()
    }

    pub fn is_any_running(&self) -> bool {
        self.document_list.is_running()
            || self.document_delete.is_running()
            || self.quiz_generate.is_running()
            || self.history.is_running()
            || self.chat_send.is_running()
            || self.tutor_start.is_running()
            || self.tutor_reply.is_running()
            || self.tutor_reset.is_running()
            || self.essay_result.is_running()
            || self.essay_list.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seq: &mut TaskSeq) -> TaskStarted {
        TaskStarted {
            id: seq.next_id(),
            cancel: Some(CancellationToken::new()),
        }
    }

    #[test]
    fn newer_task_supersedes_older_one() {
        let mut seq = TaskSeq::default();
        let mut state = TaskState::default();

        let first = started(&mut seq);
        assert!(state.on_started(&first).is_none());

        let second = started(&mut seq);
        let superseded = state.on_started(&second).unwrap();
        superseded.cancel();
        assert!(first.cancel.as_ref().unwrap().is_cancelled());

        assert!(!state.finish_if_active(first.id));
        assert!(state.is_running());
        assert!(state.finish_if_active(second.id));
        assert!(!state.is_running());
    }

    #[test]
    fn cleared_task_completion_is_dropped() {
        let mut seq = TaskSeq::default();
        let mut tasks = Tasks::default();
        let task = started(&mut seq);

        tasks.state_mut(TaskKind::History).on_started(&task);
        assert!(tasks.is_any_running());

        let token = tasks.state_mut(TaskKind::History).clear();
        assert!(token.is_some());
        assert!(!tasks.is_any_running());
        assert!(!tasks.state_mut(TaskKind::History).finish_if_active(task.id));
    }
}
