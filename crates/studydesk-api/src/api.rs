use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use studydesk_types::{
    ChatAnswer, Document, DocumentId, EssayFile, EssayId, EssayRecord, GradedEssay, HistoryKind,
    QuizCreated, RawTurn, TutorOpening, TutorReply,
};

/// Boxed future returned by every backend operation.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Operations the workspace needs from the study backend.
///
/// Authentication is the implementor's concern. Arguments are owned so
/// callers can move them into spawned tasks.
pub trait StudyApi: Send + Sync {
    /// Lists every document of the current user.
    fn list_documents(&self) -> ApiFuture<'_, Vec<Document>>;

    fn delete_document(&self, document: DocumentId) -> ApiFuture<'_, ()>;

    fn generate_quiz(&self, document: DocumentId) -> ApiFuture<'_, QuizCreated>;

    /// Persisted turns of one conversation, oldest first.
    fn load_chat_history(
        &self,
        document: DocumentId,
        kind: HistoryKind,
    ) -> ApiFuture<'_, Vec<RawTurn>>;

    fn chat_with_doc(&self, document: DocumentId, question: String)
    -> ApiFuture<'_, ChatAnswer>;

    fn start_tutor_session(&self, document: DocumentId) -> ApiFuture<'_, TutorOpening>;

    fn reply_to_tutor(&self, document: DocumentId, answer: String) -> ApiFuture<'_, TutorReply>;

    fn reset_tutor_session(&self, document: DocumentId) -> ApiFuture<'_, ()>;

    fn grade_essay_text(&self, document: DocumentId, text: String)
    -> ApiFuture<'_, GradedEssay>;

    fn grade_essay_file(&self, document: DocumentId, file: EssayFile)
    -> ApiFuture<'_, GradedEssay>;

    fn get_essay_detail(&self, essay: EssayId) -> ApiFuture<'_, GradedEssay>;

    /// All graded essays of the user, across documents.
    fn get_all_essays(&self) -> ApiFuture<'_, Vec<EssayRecord>>;
}
