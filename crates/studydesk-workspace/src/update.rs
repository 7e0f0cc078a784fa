//! Workspace reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{chat, documents, essay, mode, reveal, tutor};
use crate::notice::{Confirmation, RejectReason};
use crate::state::WorkspaceState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut WorkspaceState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::RefreshDocuments => documents::refresh(state),
        UiEvent::SelectDocument(document) => documents::select(state, document),
        UiEvent::ClearSelection => documents::clear_selection(state),
        UiEvent::SetCategoryFilter(category) => documents::set_category_filter(state, category),
        UiEvent::RequestDeleteDocument(document) => documents::request_delete(state, document),
        UiEvent::GenerateQuiz => documents::generate_quiz(state),
        UiEvent::SwitchMode(target) => mode::switch_mode(state, target),
        UiEvent::SubmitInput(text) => mode::submit_input(state, text),
        UiEvent::RequestTutorReset => tutor::request_reset(state),
        UiEvent::ConfirmationAnswered { accepted } => handle_confirmation(state, accepted),
        UiEvent::Essay(command) => essay::handle_command(state, command),

        UiEvent::RevealTick { run } => reveal::on_tick(&mut state.reveal, &mut state.store, run),

        UiEvent::TaskCompleted { kind, completed } => {
            if !state.tasks.state_mut(kind).finish_if_active(completed.id) {
                debug!(?kind, id = completed.id.0, "dropping stale task result");
                return vec![];
            }
            update(state, *completed.result)
        }
        UiEvent::Documents(event) => documents::handle_documents_event(state, event),
        UiEvent::History(event) => mode::handle_history_event(state, event),
        UiEvent::Chat(event) => chat::handle_chat_event(state, event),
        UiEvent::Tutor(event) => tutor::handle_tutor_event(state, event),
        UiEvent::EssayResult(event) => essay::handle_essay_event(state, event),
    }
}

fn handle_confirmation(state: &mut WorkspaceState, accepted: bool) -> Vec<UiEffect> {
    let Some(confirmation) = state.pending_confirmation.take() else {
        return vec![UiEffect::reject(RejectReason::NothingToConfirm)];
    };
    if !accepted {
        debug!(?confirmation, "confirmation declined");
        return vec![];
    }
    match confirmation {
        Confirmation::ResetTutor { document } => tutor::confirm_reset(state, document),
        Confirmation::DeleteDocument { document, .. } => documents::confirm_delete(state, document),
    }
}
