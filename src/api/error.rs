//! API error types and their HTTP mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Body text for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Note with id: 42 not found")]
    pub error: String,
}

/// Errors raised by the API layer.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Validation error: {0}")]
    #[diagnostic(code(notes_api::api::validation))]
    Validation(String),

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(notes_api::api::io))]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Db(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Db(DbError::Validation { .. }) | ApiError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            // Store details stay in the log, never in the response
            error!(error = %self, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
