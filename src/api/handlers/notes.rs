//! Note management handlers.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::api::error::{ApiError, ErrorResponse};
use crate::api::session::DbSession;
use crate::db::{Database, Note, NoteInput, NoteRepository};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs, bread")]
    pub content: String,
    #[schema(value_type = String, example = "2025-01-01T12:30:00")]
    pub date_created: NaiveDateTime,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            date_created: n.date_created,
        }
    }
}

/// Body for creating or updating a note. Unknown fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteRequest {
    #[schema(example = "Groceries", max_length = 50)]
    pub title: String,
    #[schema(example = "Milk, eggs, bread")]
    pub content: String,
}

impl From<NoteRequest> for NoteInput {
    fn from(req: NoteRequest) -> Self {
        NoteInput::new(req.title, req.content)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Note Groceries updated")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Turn an extracted body into validated input, before any store access.
fn validated_input(
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<NoteInput, ApiError> {
    let Json(req) = payload?;
    let input = NoteInput::from(req);
    input.validate()?;
    Ok(input)
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/notes/",
    tag = "Viewing Notes",
    responses(
        (status = 200, description = "All notes ordered by id", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(session))]
pub async fn list_notes<D: Database>(
    mut session: DbSession<D::Session>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = session.list_all().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/notes/",
    tag = "Manipulating Notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Note created", body = MessageResponse),
        (status = 422, description = "Invalid note body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(session, payload))]
pub async fn create_note<D: Database>(
    mut session: DbSession<D::Session>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let input = validated_input(payload)?;
    let note = session.add(&input).await?;
    info!(note_id = note.id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "New note {} with id {} created at {}",
            note.title, note.id, note.date_created
        ))),
    ))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Viewing Notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid note ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(session))]
pub async fn get_note<D: Database>(
    mut session: DbSession<D::Session>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let Path(id) = id?;
    let note = session.get_by_id(id).await?;
    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    patch,
    path = "/notes/{id}",
    tag = "Manipulating Notes",
    params(("id" = i64, Path, description = "Note ID")),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note updated", body = MessageResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid note ID or body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(session, payload))]
pub async fn update_note<D: Database>(
    mut session: DbSession<D::Session>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    let input = validated_input(payload)?;
    let note = session.update(id, &input).await?;
    info!(note_id = note.id, "Note updated");

    Ok(Json(MessageResponse::new(format!(
        "Note {} updated",
        note.title
    ))))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Manipulating Notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid note ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(session))]
pub async fn delete_note<D: Database>(
    mut session: DbSession<D::Session>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    let deleted = session.delete(id).await?;
    info!(note_id = deleted.id, "Note deleted");

    Ok(Json(MessageResponse::new(format!(
        "Note {} with id {} removed",
        deleted.title, deleted.id
    ))))
}
