use serde_json::json;
use studydesk_api::{HttpStudyClient, StudyApi};
use studydesk_types::{BackendRole, DocumentId, EssayFile, EssayId, HistoryKind};
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer, token: Option<&str>) -> HttpStudyClient {
    let base = Url::parse(&server.uri()).unwrap();
    HttpStudyClient::new(&base, token.map(str::to_string))
}

#[tokio::test]
async fn test_history_request_is_scoped_by_mode_and_authenticated() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/7/chat/history"))
        .and(query_param("mode", "tutor"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"role": "tutor", "content": "{\"text\":\"Q1\",\"status\":\"neutral\"}"},
            {"role": "tutor_user", "content": "my answer"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("secret"));
    let turns = client
        .load_chat_history(DocumentId(7), HistoryKind::Tutor)
        .await
        .unwrap();

    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, BackendRole::Tutor);
    assert_eq!(turns[1].role, BackendRole::TutorUser);
    assert_eq!(turns[1].content, "my answer");
}

#[tokio::test]
async fn test_chat_sends_question_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/3/chat"))
        .and(body_json(json!({"question": "What is entropy?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Disorder."})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let answer = client
        .chat_with_doc(DocumentId(3), "What is entropy?".to_string())
        .await
        .unwrap();

    assert_eq!(answer.answer, "Disorder.");
}

#[tokio::test]
async fn test_tutor_reply_decodes_finish_flag() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/3/tutor/reply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Well done, we're finished.",
            "status": "correct",
            "is_finish": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let reply = client
        .reply_to_tutor(DocumentId(3), "42".to_string())
        .await
        .unwrap();

    assert_eq!(reply.status, "correct");
    assert!(reply.is_finish);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/3/tutor/reset"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.reset_tutor_session(DocumentId(3)).await.unwrap_err();
    let message = format!("{err:#}");

    assert!(message.contains("reset tutor session"));
    assert!(message.contains("500"));
    assert!(message.contains("database down"));
}

#[tokio::test]
async fn test_essay_upload_is_multipart() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents/5/essays/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"score": 81, "feedback": "Good"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let file = EssayFile {
        file_name: "essay.txt".to_string(),
        mime_type: Some("text/plain".to_string()),
        bytes: b"My essay".to_vec(),
    };
    let graded = client.grade_essay_file(DocumentId(5), file).await.unwrap();
    assert!((graded.score - 81.0).abs() < f64::EPSILON);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"essay.txt\""));
    assert!(body.contains("My essay"));
}

#[tokio::test]
async fn test_essay_listing_and_detail() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/essays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "document_id": 7, "created_at": "2026-01-02T10:00:00Z", "score": 55},
            {"id": 2, "document_id": 9}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/essays/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "document_id": 7,
            "score": 55,
            "essay_text": "Once upon a time"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let essays = client.get_all_essays().await.unwrap();
    assert_eq!(essays.len(), 2);
    assert_eq!(essays[1].document_id, Some(DocumentId(9)));
    assert!(essays[1].created_at.is_none());

    let detail = client.get_essay_detail(EssayId(1)).await.unwrap();
    assert_eq!(detail.essay_text.as_deref(), Some("Once upon a time"));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "filename": "a.pdf", "category": "Biology"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/api/", server.uri())).unwrap();
    let client = HttpStudyClient::new(&base, None);
    let documents = client.list_documents().await.unwrap();
    assert_eq!(documents[0].category.as_deref(), Some("Biology"));
}
