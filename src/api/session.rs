//! Per-request session extractor.

use std::convert::Infallible;
use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::state::AppState;
use crate::db::Database;

/// A database session scoped to the current request.
///
/// Extracted once per request from the shared store handle and dropped when
/// the handler returns, which rolls back anything left uncommitted and
/// returns the connection to the pool.
pub struct DbSession<S>(pub S);

impl<D: Database> FromRequestParts<AppState<D>> for DbSession<D::Session> {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState<D>,
    ) -> Result<Self, Self::Rejection> {
        Ok(DbSession(state.db().session()))
    }
}

impl<S> Deref for DbSession<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S> DerefMut for DbSession<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.0
    }
}
