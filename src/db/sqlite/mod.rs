//! SQLite implementation of the database traits.
//!
//! This module provides a sqlx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod note;
mod session;


pub use connection::SqliteDatabase;
pub use session::SqliteSession;
