use studydesk_types::DocumentId;
use tracing::{debug, warn};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::ChatUiEvent;
use crate::features::messages::{Turn, decode};
use crate::features::mode::Mode;
use crate::features::reveal::start_reveal;
use crate::state::WorkspaceState;

/// Appends the question as a user turn and asks the backend.
pub fn send(state: &mut WorkspaceState, document: DocumentId, question: String) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    state.store.push(Turn::user(question.clone()));
    let task = state.begin_task(TaskKind::ChatSend, &mut effects);
    effects.push(UiEffect::AskDocument {
        task,
        document,
        question,
        generation: state.store.generation(),
    });
    effects
}

pub fn handle_chat_event(state: &mut WorkspaceState, event: ChatUiEvent) -> Vec<UiEffect> {
    match event {
        ChatUiEvent::Answered { generation, answer } => {
            if generation != state.store.generation() || state.mode != Mode::Chat {
                debug!("dropping chat answer from a previous session");
                return vec![];
            }
            let decoded = decode(&answer);
            start_reveal(
                &mut state.reveal,
                &mut state.store,
                decoded.text(),
                decoded.status(),
            )
        }
        ChatUiEvent::Failed { error } => {
            warn!(%error, "chat request failed");
            vec![]
        }
    }
}
