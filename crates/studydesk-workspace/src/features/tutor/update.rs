use studydesk_types::DocumentId;
use tracing::{debug, warn};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::TutorUiEvent;
use crate::features::messages::{Generation, Turn, TurnStatus, decode};
use crate::features::mode::Mode;
use crate::features::reveal::start_reveal;
use crate::notice::{Confirmation, Notice, RejectReason};
use crate::state::WorkspaceState;

/// Asks the backend for the opening tutor message.
pub(crate) fn start(state: &mut WorkspaceState, document: DocumentId, effects: &mut Vec<UiEffect>) {
    let task = state.begin_task(TaskKind::TutorStart, effects);
    effects.push(UiEffect::StartTutor {
        task,
        document,
        generation: state.store.generation(),
    });
}

/// Appends the answer as a user turn and sends it to the tutor.
pub fn reply(state: &mut WorkspaceState, document: DocumentId, answer: String) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    state.store.push(Turn::user(answer.clone()));
    let task = state.begin_task(TaskKind::TutorReply, &mut effects);
    effects.push(UiEffect::ReplyTutor {
        task,
        document,
        answer,
        generation: state.store.generation(),
    });
    effects
}

/// Asks the user to confirm a reset of the tutor session.
pub fn request_reset(state: &mut WorkspaceState) -> Vec<UiEffect> {
    let Some(document) = state.documents.selected else {
        return vec![UiEffect::reject(RejectReason::NoDocument)];
    };
    if state.mode != Mode::Tutor {
        return vec![UiEffect::reject(RejectReason::NotTutorMode)];
    }
    if state.is_resetting_tutor() {
        return vec![UiEffect::reject(RejectReason::Busy)];
    }

    let confirmation = Confirmation::ResetTutor { document };
    state.pending_confirmation = Some(confirmation.clone());
    vec![UiEffect::Notify(Notice::ConfirmationRequested(confirmation))]
}

pub(crate) fn confirm_reset(state: &mut WorkspaceState, document: DocumentId) -> Vec<UiEffect> {
    if state.documents.selected != Some(document) || state.mode != Mode::Tutor {
        debug!(%document, "reset confirmed after leaving the tutor session");
        return vec![];
    }
    let mut effects = Vec::new();
    let task = state.begin_task(TaskKind::TutorReset, &mut effects);
    effects.push(UiEffect::ResetTutor { task, document });
    effects
}

fn is_current(state: &WorkspaceState, generation: Generation) -> bool {
    generation == state.store.generation() && state.mode == Mode::Tutor
}

pub fn handle_tutor_event(state: &mut WorkspaceState, event: TutorUiEvent) -> Vec<UiEffect> {
    match event {
        TutorUiEvent::Started {
            generation,
            opening,
        } => {
            if !is_current(state, generation) {
                debug!("dropping tutor opening from a previous session");
                return vec![];
            }
            let (text, status, is_finish) = decode(&opening).into_parts();
            state.store.push(Turn::ai(text, status));
            state.tutor.finished |= is_finish;
            vec![]
        }
        TutorUiEvent::StartFailed { error } => {
            warn!(%error, "failed to start tutor session");
            vec![]
        }
        TutorUiEvent::Replied { generation, reply } => {
            if !is_current(state, generation) {
                debug!("dropping tutor reply from a previous session");
                return vec![];
            }
            state.tutor.finished |= reply.is_finish;
            start_reveal(
                &mut state.reveal,
                &mut state.store,
                &reply.text,
                TurnStatus::from_label(&reply.status),
            )
        }
        TutorUiEvent::ReplyFailed { error } => {
            warn!(%error, "tutor reply failed");
            vec![]
        }
        TutorUiEvent::ResetDone { document } => {
            if state.documents.selected != Some(document) || state.mode != Mode::Tutor {
                return vec![];
            }
            let mut effects = Vec::new();
            state.begin_session(&mut effects);
            start(state, document, &mut effects);
            effects
        }
        TutorUiEvent::ResetFailed { error } => {
            warn!(%error, "failed to reset tutor session");
            vec![UiEffect::alert(format!(
                "Failed to reset tutor session: {error}"
            ))]
        }
    }
}
