use std::sync::Arc;

use studydesk_api::StudyApi;
use studydesk_types::DocumentId;

use super::describe;
use crate::events::{DocumentsUiEvent, UiEvent};

pub async fn documents_load(api: Arc<dyn StudyApi>) -> UiEvent {
    let event = match api.list_documents().await {
        Ok(list) => DocumentsUiEvent::Loaded(list),
        Err(e) => DocumentsUiEvent::LoadFailed { error: describe(&e) },
    };
    UiEvent::Documents(event)
}

pub async fn document_delete(api: Arc<dyn StudyApi>, document: DocumentId) -> UiEvent {
    let event = match api.delete_document(document).await {
        Ok(()) => DocumentsUiEvent::Deleted(document),
        Err(e) => DocumentsUiEvent::DeleteFailed {
            document,
            error: describe(&e),
        },
    };
    UiEvent::Documents(event)
}

pub async fn quiz_generate(api: Arc<dyn StudyApi>, document: DocumentId) -> UiEvent {
    let event = match api.generate_quiz(document).await {
        Ok(created) => DocumentsUiEvent::QuizCreated(created),
        Err(e) => DocumentsUiEvent::QuizFailed { error: describe(&e) },
    };
    UiEvent::Documents(event)
}
