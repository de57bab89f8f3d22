//! Tests for API configuration and error mapping.

use std::net::{IpAddr, Ipv4Addr};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;

use super::{ApiError, Config};
use crate::db::DbError;

async fn body_of(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[test]
fn default_config_binds_all_interfaces_on_8000() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 8000);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
}

#[test]
fn not_found_maps_to_404() {
    let err = ApiError::from(DbError::note_not_found(5));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn validation_errors_map_to_422() {
    let from_db = ApiError::from(DbError::Validation {
        message: "too long".to_string(),
    });
    assert_eq!(from_db.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let from_api = ApiError::Validation("missing field `title`".to_string());
    assert_eq!(from_api.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn store_failures_map_to_500() {
    for err in [
        DbError::Database {
            message: "disk full".to_string(),
        },
        DbError::Connection {
            message: "refused".to_string(),
        },
        DbError::Schema {
            message: "bad".to_string(),
        },
    ] {
        assert_eq!(
            ApiError::from(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

#[tokio::test]
async fn error_response_body_carries_message() {
    let (status, body) = body_of(ApiError::from(DbError::note_not_found(99999))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Note with id: 99999 not found");
}

#[tokio::test]
async fn server_error_body_hides_store_details() {
    let (status, body) = body_of(ApiError::from(DbError::Database {
        message: "(code: 1) no such table: notes".to_string(),
    }))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
