// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryTable};
use articles_service::application::{ports::time::Clock, services::ApplicationServices};
use articles_service::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use articles_service::infrastructure::dynamodb::{DynamoArticleRepository, DynamoTable};
use articles_service::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;

pub const TAG_INDEX: &str = "TagsIndex";

pub fn repository_over(table: &Arc<InMemoryTable>, tag_index: Option<&str>) -> DynamoArticleRepository {
    let table: Arc<dyn DynamoTable> = table.clone();
    DynamoArticleRepository::new(table, tag_index.map(str::to_string))
}

pub fn build_services(table: &Arc<InMemoryTable>) -> Arc<ApplicationServices> {
    let repository = Arc::new(repository_over(table, Some(TAG_INDEX)));
    let write: Arc<dyn ArticleWriteRepository> = repository.clone();
    let read: Arc<dyn ArticleReadRepository> = repository;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    Arc::new(ApplicationServices::new(write, read, clock))
}

pub fn make_test_router(table: &Arc<InMemoryTable>) -> axum::Router {
    build_router(HttpState {
        services: build_services(table),
    })
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (_, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub fn article_payload(title: &str, tags: &[&str], author_id: &str) -> Value {
    serde_json::json!({
        "title": title,
        "subtitle": "sub",
        "introduction": "intro",
        "body": "body text",
        "tags": tags,
        "publish_date": "2024-03-01T10:00:00Z",
        "author": { "author_id": author_id, "name": "Ada" }
    })
}
