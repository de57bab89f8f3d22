//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{DeletedNote, Note, NoteInput},
};

/// CRUD operations against the Note entity, run inside a session.
///
/// Every write operation commits the session's current unit of work before
/// returning. Reads leave it open; it is rolled back when the session drops.
pub trait NoteRepository: Send {
    /// All notes ordered by id ascending.
    fn list_all(&mut self) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Insert a note and return it with its generated id and timestamp.
    fn add(&mut self, input: &NoteInput) -> impl Future<Output = DbResult<Note>> + Send;

    /// Look up a note by primary key. Fails with `DbError::NotFound`.
    fn get_by_id(&mut self, id: i64) -> impl Future<Output = DbResult<Note>> + Send;

    /// Overwrite title and content of an existing note.
    ///
    /// The creation timestamp is left untouched.
    fn update(
        &mut self,
        id: i64,
        input: &NoteInput,
    ) -> impl Future<Output = DbResult<Note>> + Send;

    /// Remove a note and return its identifying fields.
    fn delete(&mut self, id: i64) -> impl Future<Output = DbResult<DeletedNote>> + Send;
}

/// A unit of work bound to a pooled connection.
///
/// A session is owned by exactly one request. Dropping it releases the
/// connection and discards anything that was not committed.
pub trait Session: NoteRepository + 'static {
    /// Make the current unit of work durable.
    fn commit(&mut self) -> impl Future<Output = DbResult<()>> + Send;

    /// Discard the current unit of work.
    fn rollback(&mut self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Process-wide store handle.
///
/// Created once at startup and injected into the request handlers.
pub trait Database: Send + Sync + 'static {
    type Session: Session;

    /// Create the schema if it is absent. Never alters or drops anything.
    fn init_schema(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Drop and recreate the schema, destroying all stored notes.
    ///
    /// Offline maintenance only; not reachable over HTTP.
    fn reset(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Hand out a fresh session. No store access happens until it is used.
    fn session(&self) -> Self::Session;

    /// Close every pooled connection.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
