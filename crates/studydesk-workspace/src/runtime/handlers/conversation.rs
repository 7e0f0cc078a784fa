use std::sync::Arc;

use studydesk_api::StudyApi;
use studydesk_types::{DocumentId, HistoryKind};

use super::describe;
use crate::events::{ChatUiEvent, HistoryUiEvent, TutorUiEvent, UiEvent};
use crate::features::messages::Generation;

pub async fn history_load(
    api: Arc<dyn StudyApi>,
    document: DocumentId,
    kind: HistoryKind,
    generation: Generation,
) -> UiEvent {
    let event = match api.load_chat_history(document, kind).await {
        Ok(turns) => HistoryUiEvent::Loaded {
            document,
            kind,
            generation,
            turns,
        },
        Err(e) => HistoryUiEvent::Failed { error: describe(&e) },
    };
    UiEvent::History(event)
}

pub async fn chat_ask(
    api: Arc<dyn StudyApi>,
    document: DocumentId,
    question: String,
    generation: Generation,
) -> UiEvent {
    let event = match api.chat_with_doc(document, question).await {
        Ok(answer) => ChatUiEvent::Answered {
            generation,
            answer: answer.answer,
        },
        Err(e) => ChatUiEvent::Failed { error: describe(&e) },
    };
    UiEvent::Chat(event)
}

pub async fn tutor_start(
    api: Arc<dyn StudyApi>,
    document: DocumentId,
    generation: Generation,
) -> UiEvent {
    let event = match api.start_tutor_session(document).await {
        Ok(opening) => TutorUiEvent::Started {
            generation,
            opening: opening.message,
        },
        Err(e) => TutorUiEvent::StartFailed { error: describe(&e) },
    };
    UiEvent::Tutor(event)
}

pub async fn tutor_reply(
    api: Arc<dyn StudyApi>,
    document: DocumentId,
    answer: String,
    generation: Generation,
) -> UiEvent {
    let event = match api.reply_to_tutor(document, answer).await {
        Ok(reply) => TutorUiEvent::Replied { generation, reply },
        Err(e) => TutorUiEvent::ReplyFailed { error: describe(&e) },
    };
    UiEvent::Tutor(event)
}

pub async fn tutor_reset(api: Arc<dyn StudyApi>, document: DocumentId) -> UiEvent {
    let event = match api.reset_tutor_session(document).await {
        Ok(()) => TutorUiEvent::ResetDone { document },
        Err(e) => TutorUiEvent::ResetFailed { error: describe(&e) },
    };
    UiEvent::Tutor(event)
}
