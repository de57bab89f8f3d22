//! Scoped unit of work over the SQLite pool.

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::db::{DbError, DbResult, Session};

/// Lock level the open transaction was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxMode {
    /// Plain deferred `BEGIN`; takes a shared lock on first read.
    Read,
    /// `BEGIN IMMEDIATE`; holds the write lock from the start.
    Write,
}

/// A session bound to one request.
///
/// A connection is checked out and a transaction opened on the first
/// statement. `commit` and `rollback` end that transaction and hand the
/// connection back; the next statement begins a new one. Dropping the
/// session rolls back whatever is still open and returns the connection.
///
/// Writes run in an immediate transaction so a read-then-write sequence
/// never has to upgrade a shared lock; concurrent writers wait on the
/// busy timeout instead of failing with `SQLITE_BUSY`.
pub struct SqliteSession {
    pool: SqlitePool,
    tx: Option<(Transaction<'static, Sqlite>, TxMode)>,
}

impl SqliteSession {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool, tx: None }
    }

    /// Whether a transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    /// Whether the open transaction holds the write lock.
    pub fn holds_write_lock(&self) -> bool {
        matches!(self.tx, Some((_, TxMode::Write)))
    }

    /// The open transaction, beginning a deferred one if needed.
    pub(crate) async fn tx(&mut self) -> DbResult<&mut Transaction<'static, Sqlite>> {
        if self.tx.is_none() {
            let tx = self.pool.begin().await.map_err(|e| DbError::Connection {
                message: format!("Failed to begin transaction: {}", e),
            })?;
            debug!("Session began transaction");
            self.tx = Some((tx, TxMode::Read));
        }

        self.current()
    }

    /// The open transaction, making sure it holds the write lock.
    ///
    /// A deferred transaction still open from earlier reads is committed
    /// first and replaced by an immediate one.
    pub(crate) async fn write_tx(&mut self) -> DbResult<&mut Transaction<'static, Sqlite>> {
        if !self.holds_write_lock() {
            self.commit().await?;
            let tx = self
                .pool
                .begin_with("BEGIN IMMEDIATE")
                .await
                .map_err(|e| DbError::Database {
                    message: format!("Failed to begin write transaction: {}", e),
                })?;
            debug!("Session began write transaction");
            self.tx = Some((tx, TxMode::Write));
        }

        self.current()
    }

    fn current(&mut self) -> DbResult<&mut Transaction<'static, Sqlite>> {
        self.tx
            .as_mut()
            .map(|(tx, _)| tx)
            .ok_or_else(|| DbError::Database {
                message: "Session transaction unavailable".to_string(),
            })
    }
}

impl Session for SqliteSession {
    async fn commit(&mut self) -> DbResult<()> {
        if let Some((tx, _)) = self.tx.take() {
            tx.commit().await.map_err(|e| DbError::Database {
                message: format!("Failed to commit: {}", e),
            })?;
            debug!("Session committed");
        }
        Ok(())
    }

    async fn rollback(&mut self) -> DbResult<()> {
        if let Some((tx, _)) = self.tx.take() {
            tx.rollback().await.map_err(|e| DbError::Database {
                message: format!("Failed to roll back: {}", e),
            })?;
            debug!("Session rolled back");
        }
        Ok(())
    }
}
