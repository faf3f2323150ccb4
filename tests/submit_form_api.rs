//! Integration tests for the submit endpoint
//!
//! These drive the router in-process with `tower::ServiceExt::oneshot`:
//! - Valid submissions are stored and answered with 201
//! - Every failure (malformed body, missing field, storage error) is a 500
//!   with the same generic body
//! - Health and status endpoints respond

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use leadform::config::Config;
use leadform::form::{Submission, YesNo};
use leadform::rest::{build_router, ApiState};
use leadform::store::{JsonlStore, MemoryStore, StoreError, StoredSubmission, SubmissionStore};

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn insert(&self, _submission: &Submission) -> Result<StoredSubmission, StoreError> {
        Err(StoreError::Io(std::io::Error::other("disk full")))
    }
}

fn branch_b_body() -> Value {
    json!({
        "name": "Jo",
        "companyName": "Ac",
        "email": "a@b.co",
        "phone": "1234567890",
        "hasWebsite": "no",
        "wantWebsite": "yes",
        "creationChallenges": ["Other"]
    })
}

async fn post_raw(state: ApiState, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/submit-form")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(state: ApiState, body: &Value) -> (StatusCode, Value) {
    post_raw(state, body.to_string()).await
}

async fn get(state: ApiState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = build_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn memory_state() -> (ApiState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ApiState::new(Config::default(), store.clone()), store)
}

// ─── Submit ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_valid_submission_is_created() {
    let (state, store) = memory_state();

    let (status, body) = post_json(state, &branch_b_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Form submitted successfully" }));

    let documents = store.documents().await;
    assert_eq!(documents.len(), 1);
    let stored = &documents[0].submission;
    assert_eq!(stored.contact.company_name, "Ac");
    assert_eq!(stored.has_website(), YesNo::No);
}

#[tokio::test]
async fn test_stored_document_drops_unselected_branch() {
    let (state, store) = memory_state();
    let mut body = branch_b_body();
    body["campaigns"] = json!("yes");
    body["websiteUse"] = json!("Generating leads or sales");

    let (status, _) = post_json(state, &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let document = serde_json::to_value(&store.documents().await[0]).unwrap();
    assert!(document.get("campaigns").is_none());
    assert!(document.get("websiteUse").is_none());
    assert_eq!(document["wantWebsite"], "yes");
    assert!(document.get("_id").is_some());
    assert!(document.get("createdAt").is_some());
}

#[tokio::test]
async fn test_website_branch_keeps_empty_other_text() {
    let (state, store) = memory_state();
    let body = json!({
        "name": "Jo",
        "companyName": "Ac",
        "email": "a@b.co",
        "phone": "1234567890",
        "hasWebsite": "yes",
        "websiteUse": "Other",
        "websiteUseOther": "",
        "challenges": ["Attracting enough traffic"],
        "digitalperformance": "no"
    });

    let (status, _) = post_json(state, &body).await;
    assert_eq!(status, StatusCode::CREATED);

    let document = serde_json::to_value(&store.documents().await[0]).unwrap();
    assert_eq!(document["websiteUse"], "Other");
    assert_eq!(document["websiteUseOther"], "");
    assert_eq!(document["digitalperformance"], "no");
    assert_eq!(document["challenges"], json!(["Attracting enough traffic"]));
}

#[tokio::test]
async fn test_malformed_json_is_generic_error() {
    let (state, store) = memory_state();

    let (status, body) = post_raw(state, "{\"name\": ").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error submitting form" }));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_missing_required_field_is_generic_error() {
    let (state, store) = memory_state();
    let mut body = branch_b_body();
    body.as_object_mut().unwrap().remove("hasWebsite");

    let (status, body) = post_json(state, &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error submitting form" }));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_empty_identity_field_is_rejected() {
    let (state, store) = memory_state();
    let mut body = branch_b_body();
    body["email"] = json!("");

    let (status, _) = post_json(state, &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_storage_failure_is_generic_error() {
    let state = ApiState::new(Config::default(), Arc::new(FailingStore));

    let (status, body) = post_json(state, &branch_b_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error submitting form" }));
}

#[tokio::test]
async fn test_file_store_appends_documents() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data").join("submissions.jsonl");
    let state = ApiState::new(Config::default(), Arc::new(JsonlStore::new(path.clone())));

    for _ in 0..2 {
        let (status, _) = post_json(state.clone(), &branch_b_body()).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_ne!(lines[0]["_id"], lines[1]["_id"]);
    assert_eq!(lines[1]["hasWebsite"], "no");
}

// ─── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_and_status() {
    let (state, _) = memory_state();

    let (status, body) = get(state.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(state, "/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_openapi_document_lists_submit_path() {
    let (state, _) = memory_state();

    let (status, body) = get(state, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/submit-form").is_some());
}
