use studydesk_types::{DocumentId, EssayId};
use tracing::warn;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{EssayCommand, EssayUiEvent};
use crate::notice::RejectReason;
use crate::state::WorkspaceState;

use super::state::past_attempts_for;

pub fn handle_command(state: &mut WorkspaceState, command: EssayCommand) -> Vec<UiEffect> {
    match command {
        EssayCommand::SetInputMode(mode) => {
            state.essay.input_mode = mode;
            vec![]
        }
        EssayCommand::SetText(text) => {
            state.essay.text = text;
            vec![]
        }
        EssayCommand::SelectFile(file) => {
            state.essay.file = file;
            vec![]
        }
        EssayCommand::Submit => submit(state),
        EssayCommand::ViewAttempt(essay) => view_attempt(state, essay),
        EssayCommand::RefreshAttempts => {
            let Some(document) = state.documents.selected else {
                return vec![UiEffect::reject(RejectReason::NoDocument)];
            };
            let mut effects = Vec::new();
            refresh_attempts(state, document, &mut effects);
            effects
        }
        EssayCommand::Reset => {
            state.essay.reset();
            vec![]
        }
    }
}

fn submit(state: &mut WorkspaceState) -> Vec<UiEffect> {
    let Some(document) = state.documents.selected else {
        return vec![UiEffect::reject(RejectReason::NoDocument)];
    };
    let submission = match state.essay.submission() {
        Ok(submission) => submission,
        Err(reason) => return vec![UiEffect::reject(reason)],
    };

    state.essay.displayed = None;
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::EssayResult, &mut effects);
    effects.push(UiEffect::GradeEssay {
        task,
        document,
        submission,
    });
    effects
}

/// Loads a past attempt. Shares the task slot with grading, so whichever
/// was requested last is the one displayed. The current result stays up
/// until the detail arrives.
fn view_attempt(state: &mut WorkspaceState, essay: EssayId) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::EssayResult, &mut effects);
    effects.push(UiEffect::LoadEssayDetail { task, essay });
    effects
}

pub(crate) fn refresh_attempts(
    state: &mut WorkspaceState,
    document: DocumentId,
    effects: &mut Vec<UiEffect>,
) {
    let task = state.begin_task(TaskKind::EssayList, effects);
    effects.push(UiEffect::LoadEssays { task, document });
}

pub fn handle_essay_event(state: &mut WorkspaceState, event: EssayUiEvent) -> Vec<UiEffect> {
    match event {
        EssayUiEvent::Graded(result) => {
            state.essay.displayed = Some(result);
            let mut effects = Vec::new();
            if let Some(document) = state.documents.selected {
                refresh_attempts(state, document, &mut effects);
            }
            effects
        }
        EssayUiEvent::GradeFailed { error } => {
            warn!(%error, "essay grading failed");
            vec![UiEffect::alert(format!("Essay grading failed: {error}"))]
        }
        EssayUiEvent::DetailLoaded(detail) => {
            state.essay.displayed = Some(detail);
            vec![]
        }
        EssayUiEvent::DetailFailed { error } => {
            warn!(%error, "failed to load essay detail");
            vec![]
        }
        EssayUiEvent::AttemptsLoaded { document, essays } => {
            if state.documents.selected == Some(document) {
                state.essay.attempts = past_attempts_for(document, essays);
            }
            vec![]
        }
        EssayUiEvent::AttemptsFailed { error } => {
            warn!(%error, "failed to load past essays");
            vec![]
        }
    }
}
