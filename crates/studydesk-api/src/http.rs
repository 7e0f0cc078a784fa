use anyhow::{Context, Result, bail};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use studydesk_types::{
    ChatAnswer, Document, DocumentId, EssayFile, EssayId, EssayRecord, GradedEssay, HistoryKind,
    QuizCreated, RawTurn, TutorOpening, TutorReply,
};
use url::Url;

use crate::api::{ApiFuture, StudyApi};

/// Longest response body quoted in an error message.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// `StudyApi` over the backend's JSON HTTP interface.
#[derive(Clone)]
pub struct HttpStudyClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
}

#[derive(Serialize)]
struct EssayTextRequest<'a> {
    text: &'a str,
}

impl HttpStudyClient {
    pub fn new(base_url: &Url, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, what: &str) -> Result<reqwest::Response> {
        tracing::debug!(request = what, "sending backend request");
        let response = builder
            .send()
            .await
            .with_context(|| format!("{what}: request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            bail!("{what}: backend returned {status}: {body}");
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder, what: &str) -> Result<T> {
        let response = self.send(builder, what).await?;
        response
            .json()
            .await
            .with_context(|| format!("{what}: failed to decode response"))
    }
}

impl StudyApi for HttpStudyClient {
    fn list_documents(&self) -> ApiFuture<'_, Vec<Document>> {
        Box::pin(async move {
            self.send_json(self.request(Method::GET, "/history"), "list documents")
                .await
        })
    }

    fn delete_document(&self, document: DocumentId) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let path = format!("/delete/{document}");
            self.send(self.request(Method::DELETE, &path), "delete document")
                .await?;
            Ok(())
        })
    }

    fn generate_quiz(&self, document: DocumentId) -> ApiFuture<'_, QuizCreated> {
        Box::pin(async move {
            let path = format!("/documents/{document}/quiz");
            self.send_json(self.request(Method::POST, &path), "generate quiz")
                .await
        })
    }

    fn load_chat_history(
        &self,
        document: DocumentId,
        kind: HistoryKind,
    ) -> ApiFuture<'_, Vec<RawTurn>> {
        Box::pin(async move {
            let path = format!("/documents/{document}/chat/history");
            let builder = self
                .request(Method::GET, &path)
                .query(&[("mode", kind.as_str())]);
            self.send_json(builder, "load chat history").await
        })
    }

    fn chat_with_doc(
        &self,
        document: DocumentId,
        question: String,
    ) -> ApiFuture<'_, ChatAnswer> {
        Box::pin(async move {
            let path = format!("/documents/{document}/chat");
            let builder = self.request(Method::POST, &path).json(&QuestionRequest {
                question: &question,
            });
            self.send_json(builder, "chat with document").await
        })
    }

    fn start_tutor_session(&self, document: DocumentId) -> ApiFuture<'_, TutorOpening> {
        Box::pin(async move {
            let path = format!("/documents/{document}/tutor/start");
            self.send_json(self.request(Method::POST, &path), "start tutor session")
                .await
        })
    }

    fn reply_to_tutor(&self, document: DocumentId, answer: String) -> ApiFuture<'_, TutorReply> {
        Box::pin(async move {
            let path = format!("/documents/{document}/tutor/reply");
            let builder = self
                .request(Method::POST, &path)
                .json(&QuestionRequest { question: &answer });
            self.send_json(builder, "reply to tutor").await
        })
    }

    fn reset_tutor_session(&self, document: DocumentId) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            let path = format!("/documents/{document}/tutor/reset");
            self.send(self.request(Method::POST, &path), "reset tutor session")
                .await?;
            Ok(())
        })
    }

    fn grade_essay_text(
        &self,
        document: DocumentId,
        text: String,
    ) -> ApiFuture<'_, GradedEssay> {
        Box::pin(async move {
            let path = format!("/documents/{document}/essays");
            let builder = self
                .request(Method::POST, &path)
                .json(&EssayTextRequest { text: &text });
            self.send_json(builder, "grade essay").await
        })
    }

    fn grade_essay_file(
        &self,
        document: DocumentId,
        file: EssayFile,
    ) -> ApiFuture<'_, GradedEssay> {
        Box::pin(async move {
            let path = format!("/documents/{document}/essays/upload");
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = file.mime_type.as_deref() {
                part = part
                    .mime_str(mime)
                    .with_context(|| format!("grade essay file: invalid mime type '{mime}'"))?;
            }
            let form = Form::new().part("file", part);
            let builder = self.request(Method::POST, &path).multipart(form);
            self.send_json(builder, "grade essay file").await
        })
    }

    fn get_essay_detail(&self, essay: EssayId) -> ApiFuture<'_, GradedEssay> {
        Box::pin(async move {
            let path = format!("/essays/{essay}");
            self.send_json(self.request(Method::GET, &path), "load essay detail")
                .await
        })
    }

    fn get_all_essays(&self) -> ApiFuture<'_, Vec<EssayRecord>> {
        Box::pin(async move {
            self.send_json(self.request(Method::GET, "/essays"), "list essays")
                .await
        })
    }
}
