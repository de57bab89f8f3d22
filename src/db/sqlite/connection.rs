//! SQLite connection pool and schema management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use super::helpers::{CREATE_NOTES_TABLE, DROP_NOTES_TABLE};
use super::session::SqliteSession;
use crate::db::{Database, DbError, DbResult};

/// How long a writer waits for the lock held by another session.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database implementation.
///
/// Owns the connection pool. Cloning the handle is cheap and shares the pool.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) the database at `url` with a bounded pool.
    ///
    /// Accepts sqlx URLs such as `sqlite://notes.db` or `sqlite::memory:`.
    pub async fn connect(url: &str, max_connections: u32) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Connection {
                message: format!("Invalid database URL '{}': {}", url, e),
            })?
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        info!(url, max_connections, "Connection pool ready");
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every connection to `:memory:` is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool.
    ///
    /// Useful for tests that need to inspect the store directly.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Session = SqliteSession;

    async fn init_schema(&self) -> DbResult<()> {
        sqlx::query(CREATE_NOTES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
            })?;

        info!("Database initialized");
        Ok(())
    }

    async fn reset(&self) -> DbResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| DbError::Connection {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        for statement in [DROP_NOTES_TABLE, CREATE_NOTES_TABLE] {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::Schema {
                    message: e.to_string(),
                })?;
        }

        tx.commit().await.map_err(|e| DbError::Schema {
            message: format!("Failed to commit reset: {}", e),
        })?;

        warn!("Database reset: all notes dropped");
        Ok(())
    }

    fn session(&self) -> SqliteSession {
        SqliteSession::new(self.pool.clone())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Connection pool closed");
    }
}
