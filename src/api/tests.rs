//! API Contract Tests
//!
//! Drives `BackendClient` against a recording transport.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;
use serde_json::{json, Value};

use super::*;
use crate::models::{Module, ReminderCategory, ReminderDraft, ScoreDraft, TaskType, WritingDraft};

/// Records requests and replays queued responses in order
#[derive(Default)]
struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    fn respond(self, status: u16, body: Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}

fn client(transport: RecordingTransport) -> BackendClient<RecordingTransport> {
    BackendClient::new(BackendConfig::default(), transport)
}

#[test]
fn test_save_score_posts_parsed_score() {
    let api = client(RecordingTransport::default().respond(200, json!({"id": "s1"})));

    let created = block_on(api.save_score(&ScoreDraft::default())).unwrap();

    assert_eq!(created.id, json!("s1"));
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://localhost:8000/api/scores");
    assert_eq!(
        requests[0].body,
        Some(json!({"user_id": "", "module": "Reading", "score": 6.5, "note": ""}))
    );
}

#[test]
fn test_save_score_sends_null_for_unparseable_score() {
    let api = client(RecordingTransport::default().respond(201, json!({"id": 3})));
    let draft = ScoreDraft {
        user_id: "u1".to_string(),
        module: Module::Speaking,
        score: "seven".to_string(),
        note: "mock".to_string(),
    };

    block_on(api.save_score(&draft)).unwrap();

    let body = api.transport().requests()[0].body.clone().unwrap();
    assert_eq!(body["score"], Value::Null);
    assert_eq!(body["module"], json!("Speaking"));
}

#[test]
fn test_weaknesses_without_user_has_no_query() {
    let api = client(RecordingTransport::default().respond(200, json!({"weak_modules": [], "suggestions": []})));

    block_on(api.weaknesses("")).unwrap();

    let requests = api.transport().requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "http://localhost:8000/api/weaknesses");
    assert_eq!(requests[0].body, None);
}

#[test]
fn test_weaknesses_with_user_encodes_query() {
    let api = client(RecordingTransport::default().respond(
        200,
        json!({"weak_modules": ["Writing"], "suggestions": ["Practise Task 2 daily"]}),
    ));

    let report = block_on(api.weaknesses("mai tran+1")).unwrap();

    assert_eq!(
        api.transport().requests()[0].url,
        "http://localhost:8000/api/weaknesses?user_id=mai+tran%2B1"
    );
    assert_eq!(report.weak_modules, vec!["Writing"]);
    assert_eq!(report.suggestions, vec!["Practise Task 2 daily"]);
}

#[test]
fn test_generate_ideas_request_and_result() {
    let api = client(RecordingTransport::default().respond(200, json!({"ideas": ["a", "b"]})));

    let ideas = block_on(api.generate_ideas("technology in education")).unwrap();

    assert_eq!(ideas, vec!["a", "b"]);
    let requests = api.transport().requests();
    assert_eq!(requests[0].url, "http://localhost:8000/api/ideas");
    assert_eq!(requests[0].body, Some(json!({"topic": "technology in education", "count": 5})));
}

#[test]
fn test_evaluate_writing_returns_band_and_feedback() {
    let api = client(RecordingTransport::default().respond(
        200,
        json!({"estimated_band": 6.5, "feedback": "Good coherence; vary vocabulary."}),
    ));
    let draft = WritingDraft {
        user_id: String::new(),
        task_type: TaskType::Task2,
        prompt: "Some argue...".to_string(),
        content: "In recent years".to_string(),
    };

    let evaluation = block_on(api.evaluate_writing(&draft)).unwrap();

    assert_eq!(evaluation.estimated_band.to_string(), "6.5");
    assert_eq!(evaluation.feedback, "Good coherence; vary vocabulary.");
    assert_eq!(
        api.transport().requests()[0].body,
        Some(json!({
            "user_id": "",
            "task_type": "Task2",
            "prompt": "Some argue...",
            "content": "In recent years"
        }))
    );
}

#[test]
fn test_add_reminder_then_reloads_list() {
    let transport = RecordingTransport::default()
        .respond(200, json!({"id": "r9"}))
        .respond(
            200,
            json!({"items": [{"_id": "r9", "title": "Mock test", "category": "reading", "due_date": "2026-10-20T09:00"}]}),
        );
    let api = client(transport);
    let draft = ReminderDraft {
        user_id: "u1".to_string(),
        title: "Mock test".to_string(),
        due_date: "2026-10-20T09:00".to_string(),
        category: ReminderCategory::Reading,
    };

    let (created, items) = block_on(api.add_reminder_and_reload(&draft)).unwrap();

    assert_eq!(created.id, json!("r9"));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "r9");

    let requests = api.transport().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://localhost:8000/api/reminders");
    assert_eq!(
        requests[0].body,
        Some(json!({"user_id": "u1", "title": "Mock test", "due_date": "2026-10-20T09:00", "category": "reading"}))
    );
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].url, "http://localhost:8000/api/reminders?user_id=u1");
}

#[test]
fn test_failed_add_reminder_skips_reload() {
    let api = client(RecordingTransport::default().respond(500, json!({"detail": "db down"})));

    let err = block_on(api.add_reminder_and_reload(&ReminderDraft::default())).unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(api.transport().requests().len(), 1);
}

#[test]
fn test_list_reminders_keeps_rows_with_null_fields() {
    let api = client(RecordingTransport::default().respond(
        200,
        json!({"items": [
            {"_id": "a", "title": "Mock test", "category": "reading", "due_date": "2026-10-20T09:00:00"},
            {"_id": "b", "title": "Essay draft", "category": "writing", "due_date": null}
        ]}),
    ));

    let items = block_on(api.list_reminders("")).unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "a");
    assert_eq!(items[1].id, "b");
    assert_eq!(items[1].due_date, "");
}

#[test]
fn test_null_ideas_is_empty_list() {
    let api = client(RecordingTransport::default().respond(200, json!({"ideas": null})));

    assert_eq!(block_on(api.generate_ideas("x")).unwrap(), Vec::<String>::new());
}

#[test]
fn test_greeting_network_failure_is_absent() {
    let api = client(RecordingTransport::default().fail(ApiError::Network("connection refused".to_string())));

    assert_eq!(block_on(api.greeting()), None);
    assert_eq!(api.transport().requests()[0].url, "http://localhost:8000/");
}

#[test]
fn test_greeting_message_and_empty_message() {
    let api = client(
        RecordingTransport::default()
            .respond(200, json!({"message": "Hello from IELTS Coach"}))
            .respond(200, json!({"message": ""})),
    );

    assert_eq!(block_on(api.greeting()), Some("Hello from IELTS Coach".to_string()));
    assert_eq!(block_on(api.greeting()), None);
}

#[test]
fn test_create_passage_uses_fixed_parameters() {
    let api = client(RecordingTransport::default().respond(
        200,
        json!({"title": "Urban Farming", "paragraphs": ["A", "B", "C"]}),
    ));

    let passage = block_on(api.create_passage()).unwrap();

    assert_eq!(passage.paragraphs.len(), 3);
    assert_eq!(
        api.transport().requests()[0].body,
        Some(json!({"level": "moderate", "paragraphs": 3}))
    );
}

#[test]
fn test_info_preserves_key_order() {
    let api = client(RecordingTransport::default().respond(200, json!({"zeta": 1, "alpha": "two"})));

    let info = block_on(api.info()).unwrap();

    let keys: Vec<&String> = info.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn test_non_json_body_is_decode_error() {
    let transport = RecordingTransport::default();
    transport.responses.borrow_mut().push_back(Ok(ApiResponse {
        status: 200,
        body: "<html>oops</html>".to_string(),
    }));
    let api = client(transport);

    let err = block_on(api.generate_ideas("x")).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}
