//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Holds the process-wide store handle. Generic over `D: Database` so tests
/// and production inject their own implementation at startup.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - only the Arc needs to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState around the given database.
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}
