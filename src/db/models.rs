//! Domain models.
//!
//! These types are storage-agnostic and represent the core business entities.
//! Callers only ever receive detached copies; the store owns the rows.

use chrono::NaiveDateTime;

use super::{DbError, DbResult};

/// Maximum length of a note title, matching the `VARCHAR(50)` column.
pub const TITLE_MAX_LEN: usize = 50;

/// A persisted text note.
///
/// `id` and `date_created` are generated by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date_created: NaiveDateTime,
}

/// Caller-supplied fields for creating or updating a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check the input against the column constraints before it reaches the store.
    pub fn validate(&self) -> DbResult<()> {
        let len = self.title.chars().count();
        if len > TITLE_MAX_LEN {
            return Err(DbError::Validation {
                message: format!(
                    "title must not exceed {} characters (got {})",
                    TITLE_MAX_LEN, len
                ),
            });
        }
        Ok(())
    }
}

/// Identifying fields of a note that has just been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedNote {
    pub id: i64,
    pub title: String,
}

impl From<Note> for DeletedNote {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
        }
    }
}
