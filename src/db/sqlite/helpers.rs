//! Shared helper functions for the SQLite backend.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::db::{DbError, DbResult, Note};

/// Schema for the notes table. Safe to run on every startup.
pub const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY NOT NULL,
    title VARCHAR(50) NOT NULL,
    content TEXT NOT NULL,
    date_created DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const DROP_NOTES_TABLE: &str = "DROP TABLE IF EXISTS notes";

/// Column list shared by every query that materializes a `Note`.
pub const NOTE_COLUMNS: &str = "id, title, content, date_created";

/// Map a query failure to a storage-agnostic error.
pub fn database_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// Build a detached `Note` from a result row.
pub fn row_to_note(row: &SqliteRow) -> DbResult<Note> {
    Ok(Note {
        id: row.try_get("id").map_err(database_error)?,
        title: row.try_get("title").map_err(database_error)?,
        content: row.try_get("content").map_err(database_error)?,
        date_created: row.try_get("date_created").map_err(database_error)?,
    })
}
