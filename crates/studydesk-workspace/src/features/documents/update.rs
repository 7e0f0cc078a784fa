use studydesk_types::DocumentId;
use tracing::{debug, warn};

use super::state::categories;
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::DocumentsUiEvent;
use crate::features::mode::Mode;
use crate::notice::{Confirmation, Notice, RejectReason, Route};
use crate::state::WorkspaceState;

pub fn refresh(state: &mut WorkspaceState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::DocumentList, &mut effects);
    effects.push(UiEffect::LoadDocuments { task });
    effects
}

/// Selects `document`, resetting every per-document state to summary mode.
pub fn select(state: &mut WorkspaceState, document: DocumentId) -> Vec<UiEffect> {
    if state.documents.get(document).is_none() {
        return vec![UiEffect::reject(RejectReason::UnknownDocument)];
    }
    if state.documents.selected == Some(document) {
        return vec![];
    }
    let mut effects = Vec::new();
    reset_selection(state, Some(document), &mut effects);
    effects
}

pub fn clear_selection(state: &mut WorkspaceState) -> Vec<UiEffect> {
    if state.documents.selected.is_none() {
        return vec![];
    }
    let mut effects = Vec::new();
    reset_selection(state, None, &mut effects);
    effects
}

fn reset_selection(
    state: &mut WorkspaceState,
    selected: Option<DocumentId>,
    effects: &mut Vec<UiEffect>,
) {
    state.begin_session(effects);
    state.cancel_tasks(TaskKind::DOCUMENT_SCOPED, effects);
    state.documents.selected = selected;
    state.mode = Mode::Summary;
    state.essay = Default::default();
    state.pending_confirmation = None;
    debug!(?selected, "document selection changed");
}

pub fn set_category_filter(state: &mut WorkspaceState, category: Option<String>) -> Vec<UiEffect> {
    state.documents.category_filter = category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    vec![]
}

/// Asks the user to confirm deletion of `document`.
pub fn request_delete(state: &mut WorkspaceState, document: DocumentId) -> Vec<UiEffect> {
    let Some(target) = state.documents.get(document) else {
        return vec![UiEffect::reject(RejectReason::UnknownDocument)];
    };
    let confirmation = Confirmation::DeleteDocument {
        document,
        filename: target.filename.clone(),
    };
    state.pending_confirmation = Some(confirmation.clone());
    vec![UiEffect::Notify(Notice::ConfirmationRequested(confirmation))]
}

pub(crate) fn confirm_delete(state: &mut WorkspaceState, document: DocumentId) -> Vec<UiEffect> {
    if state.tasks.is_running(TaskKind::DocumentDelete) {
        return vec![UiEffect::reject(RejectReason::Busy)];
    }
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::DocumentDelete, &mut effects);
    effects.push(UiEffect::DeleteDocument { task, document });
    effects
}

pub fn generate_quiz(state: &mut WorkspaceState) -> Vec<UiEffect> {
    let Some(document) = state.documents.selected else {
        return vec![UiEffect::reject(RejectReason::NoDocument)];
    };
    if state.is_generating_quiz() {
        return vec![UiEffect::reject(RejectReason::Busy)];
    }
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::QuizGenerate, &mut effects);
    effects.push(UiEffect::GenerateQuiz { task, document });
    effects
}

pub fn handle_documents_event(state: &mut WorkspaceState, event: DocumentsUiEvent) -> Vec<UiEffect> {
    match event {
        DocumentsUiEvent::Loaded(list) => {
            debug!(count = list.len(), "documents loaded");
            state.documents.list = list;

            let mut effects = Vec::new();
            if let Some(selected) = state.documents.selected
                && state.documents.get(selected).is_none()
            {
                reset_selection(state, None, &mut effects);
            }
            if let Some(filter) = state.documents.category_filter.as_ref()
                && !categories(&state.documents.list).contains(filter)
            {
                state.documents.category_filter = None;
            }
            effects
        }
        DocumentsUiEvent::LoadFailed { error } => {
            warn!(%error, "failed to load documents");
            vec![]
        }
        DocumentsUiEvent::Deleted(document) => {
            state.documents.list.retain(|doc| doc.id != document);
            let mut effects = Vec::new();
            if state.documents.selected == Some(document) {
                reset_selection(state, None, &mut effects);
            }
            effects
        }
        DocumentsUiEvent::DeleteFailed { document, error } => {
            warn!(%document, %error, "failed to delete document");
            vec![UiEffect::alert(format!("Failed to delete document: {error}"))]
        }
        DocumentsUiEvent::QuizCreated(created) => match created.playable_id() {
            Some(quiz_id) => vec![UiEffect::Notify(Notice::Navigate(Route::QuizPlayer {
                quiz_id,
            }))],
            None => {
                warn!("quiz created without an id");
                vec![UiEffect::alert("Quiz was created but no quiz id was returned")]
            }
        },
        DocumentsUiEvent::QuizFailed { error } => {
            warn!(%error, "quiz generation failed");
            vec![UiEffect::alert(format!("Failed to generate quiz: {error}"))]
        }
    }
}
