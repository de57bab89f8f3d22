//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access so the
//! HTTP layer never talks to a concrete storage backend directly.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Note) and caller-supplied inputs
//! - `repository`: Trait definitions for the store handle, sessions and CRUD
//! - `sqlite`: sqlx-backed SQLite implementation

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteDatabase, SqliteSession};
