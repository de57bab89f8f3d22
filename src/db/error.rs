//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("{entity_type} with id: {id} not found")]
    #[diagnostic(code(notes_api::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(notes_api::db::validation_error))]
    Validation { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(notes_api::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(notes_api::db::connection_error),
        help("check that DATABASE_URL points at a writable SQLite file")
    )]
    Connection { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(notes_api::db::schema_error))]
    Schema { message: String },
}

impl DbError {
    /// Shorthand for a missing note.
    pub fn note_not_found(id: i64) -> Self {
        DbError::NotFound {
            entity_type: "Note".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
