use studydesk_types::HistoryKind;
use tracing::{debug, warn};

use super::Mode;
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::HistoryUiEvent;
use crate::features::messages::map_history;
use crate::features::{chat, essay, tutor};
use crate::notice::{Confirmation, RejectReason};
use crate::state::WorkspaceState;

/// Switches the selected document to `mode`.
///
/// Re-selecting the active mode is a no-op. Any other switch starts a new
/// session; chat and tutor then fetch their persisted history, grader
/// refreshes past essay attempts.
pub fn switch_mode(state: &mut WorkspaceState, mode: Mode) -> Vec<UiEffect> {
    let Some(document) = state.documents.selected else {
        return vec![UiEffect::reject(RejectReason::NoDocument)];
    };
    if state.mode == mode {
        return vec![];
    }

    let mut effects = Vec::new();
    state.begin_session(&mut effects);
    if matches!(
        state.pending_confirmation,
        Some(Confirmation::ResetTutor { .. })
    ) {
        state.pending_confirmation = None;
    }
    state.mode = mode;
    debug!(%document, %mode, "mode switched");

    if let Some(kind) = mode.history_kind() {
        let task = state.begin_task(TaskKind::History, &mut effects);
        effects.push(UiEffect::LoadHistory {
            task,
            document,
            kind,
            generation: state.store.generation(),
        });
    } else if mode == Mode::Grader {
        essay::refresh_attempts(state, document, &mut effects);
    }
    effects
}

/// Routes typed input to the chat or tutor send path.
pub fn submit_input(state: &mut WorkspaceState, text: String) -> Vec<UiEffect> {
    let Some(document) = state.documents.selected else {
        return vec![UiEffect::reject(RejectReason::NoDocument)];
    };
    if !state.mode.is_conversational() {
        return vec![UiEffect::reject(RejectReason::NotConversational)];
    }
    let text = text.trim();
    if text.is_empty() {
        return vec![UiEffect::reject(RejectReason::EmptyInput)];
    }
    if state.is_busy() {
        debug!("input refused while busy");
        return vec![UiEffect::reject(RejectReason::Busy)];
    }

    match state.mode {
        Mode::Chat => chat::send(state, document, text.to_string()),
        Mode::Tutor => tutor::reply(state, document, text.to_string()),
        Mode::Summary | Mode::Grader => vec![],
    }
}

pub fn handle_history_event(state: &mut WorkspaceState, event: HistoryUiEvent) -> Vec<UiEffect> {
    match event {
        HistoryUiEvent::Loaded {
            document,
            kind,
            generation,
            turns,
        } => {
            let current = generation == state.store.generation()
                && state.documents.selected == Some(document)
                && state.mode.history_kind() == Some(kind);
            if !current {
                debug!(%document, %kind, "dropping superseded history");
                return vec![];
            }

            let mapped = map_history(&turns, kind);
            state.store.replace(generation, mapped.turns);

            let mut effects = Vec::new();
            if kind == HistoryKind::Tutor {
                state.tutor.finished = mapped.finished;
                if state.store.is_empty() {
                    tutor::start(state, document, &mut effects);
                }
            }
            effects
        }
        HistoryUiEvent::Failed { error } => {
            warn!(%error, "failed to load conversation history");
            vec![]
        }
    }
}
