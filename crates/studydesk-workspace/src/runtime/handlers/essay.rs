use std::sync::Arc;

use studydesk_api::StudyApi;
use studydesk_types::{DocumentId, EssayId};

use super::describe;
use crate::events::{EssayUiEvent, UiEvent};
use crate::features::essay::EssaySubmission;

pub async fn essay_grade(
    api: Arc<dyn StudyApi>,
    document: DocumentId,
    submission: EssaySubmission,
) -> UiEvent {
    let result = match submission {
        EssaySubmission::Text(text) => api.grade_essay_text(document, text).await,
        EssaySubmission::File(file) => api.grade_essay_file(document, file).await,
    };
    let event = match result {
        Ok(graded) => EssayUiEvent::Graded(graded),
        Err(e) => EssayUiEvent::GradeFailed { error: describe(&e) },
    };
    UiEvent::EssayResult(event)
}

pub async fn essay_detail_load(api: Arc<dyn StudyApi>, essay: EssayId) -> UiEvent {
    let event = match api.get_essay_detail(essay).await {
        Ok(detail) => EssayUiEvent::DetailLoaded(detail),
        Err(e) => EssayUiEvent::DetailFailed { error: describe(&e) },
    };
    UiEvent::EssayResult(event)
}

/// Loads every essay and keeps the ones for `document`.
pub async fn essays_load(api: Arc<dyn StudyApi>, document: DocumentId) -> UiEvent {
    let event = match api.get_all_essays().await {
        Ok(essays) => EssayUiEvent::AttemptsLoaded { document, essays },
        Err(e) => EssayUiEvent::AttemptsFailed { error: describe(&e) },
    };
    UiEvent::EssayResult(event)
}
