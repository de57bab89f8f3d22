//! Minimal note-taking HTTP service.
//!
//! - [`db`]: the Note entity, session provider and CRUD operations
//! - [`api`]: axum handlers, routing and server lifecycle

pub mod api;
pub mod db;
