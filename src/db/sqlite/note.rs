//! SQLite NoteRepository implementation.

use tracing::debug;

use super::helpers::{NOTE_COLUMNS, database_error, row_to_note};
use super::session::SqliteSession;
use crate::db::{DbError, DbResult, DeletedNote, Note, NoteInput, NoteRepository, Session};

impl SqliteSession {
    /// Fetch a note by id or fail with `NotFound`.
    ///
    /// Shared by `get_by_id`, `update` and `delete`.
    async fn fetch_or_not_found(&mut self, id: i64) -> DbResult<Note> {
        let tx = self.tx().await?;
        let row = sqlx::query(&format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(database_error)?;

        match row {
            Some(row) => row_to_note(&row),
            None => Err(DbError::note_not_found(id)),
        }
    }

    /// `fetch_or_not_found` inside a write transaction.
    ///
    /// A miss rolls back so the write lock is not held until the session drops.
    async fn locked_fetch(&mut self, id: i64) -> DbResult<Note> {
        match self.fetch_or_not_found(id).await {
            Ok(note) => Ok(note),
            Err(e) => {
                self.rollback().await?;
                Err(e)
            }
        }
    }
}

impl NoteRepository for SqliteSession {
    async fn list_all(&mut self) -> DbResult<Vec<Note>> {
        let tx = self.tx().await?;
        let rows = sqlx::query(&format!("SELECT {} FROM notes ORDER BY id", NOTE_COLUMNS))
            .fetch_all(&mut **tx)
            .await
            .map_err(database_error)?;

        rows.iter().map(row_to_note).collect()
    }

    async fn add(&mut self, input: &NoteInput) -> DbResult<Note> {
        let tx = self.write_tx().await?;

        // RETURNING reads the generated id and timestamp back before commit
        let row = sqlx::query(&format!(
            "INSERT INTO notes (title, content) VALUES (?, ?) RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.content)
        .fetch_one(&mut **tx)
        .await
        .map_err(database_error)?;
        let note = row_to_note(&row)?;

        self.commit().await?;
        debug!(note_id = note.id, "Note inserted");
        Ok(note)
    }

    async fn get_by_id(&mut self, id: i64) -> DbResult<Note> {
        self.fetch_or_not_found(id).await
    }

    async fn update(&mut self, id: i64, input: &NoteInput) -> DbResult<Note> {
        self.write_tx().await?;
        let mut note = self.locked_fetch(id).await?;
        note.title = input.title.clone();
        note.content = input.content.clone();

        let tx = self.tx().await?;
        sqlx::query("UPDATE notes SET title = ?, content = ? WHERE id = ?")
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.id)
            .execute(&mut **tx)
            .await
            .map_err(database_error)?;

        self.commit().await?;
        debug!(note_id = note.id, "Note updated");
        Ok(note)
    }

    async fn delete(&mut self, id: i64) -> DbResult<DeletedNote> {
        self.write_tx().await?;
        let note = self.locked_fetch(id).await?;

        let tx = self.tx().await?;
        sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(note.id)
            .execute(&mut **tx)
            .await
            .map_err(database_error)?;

        self.commit().await?;
        debug!(note_id = note.id, "Note deleted");
        Ok(DeletedNote::from(note))
    }
}
