//! Tests for system endpoints and API docs.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::SqliteDatabase;

async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory().await.unwrap();
    routes::create_router(AppState::new(db))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test(flavor = "multi_thread")]
async fn root_greets() {
    let (status, body) = get(test_app().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello!");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok() {
    let (status, body) = get(test_app().await, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn docs_are_served() {
    let (status, _) = get(test_app().await, "/docs").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn openapi_lists_note_paths() {
    use utoipa::OpenApi;

    let doc = routes::ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();
    assert!(paths.iter().any(|p| p.as_str() == "/notes/"));
    assert!(paths.iter().any(|p| p.as_str() == "/notes/{id}"));
}
