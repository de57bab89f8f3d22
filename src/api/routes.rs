//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorResponse;
use super::handlers::{self, HealthResponse, MessageResponse, NoteRequest, NoteResponse};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        version = "0.1.0",
        description = "Create, list, fetch, update and delete short text notes stored in SQLite",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_notes,
        handlers::create_note,
        handlers::get_note,
        handlers::update_note,
        handlers::delete_note,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            NoteRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "Viewing Notes", description = "Read-only note endpoints"),
        (name = "Manipulating Notes", description = "Endpoints that change stored notes")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Note routes (generic over Database); the collection answers with or
    // without the trailing slash
    let note_routes = routes!(D => {
        get "/notes/" => handlers::list_notes,
        post "/notes/" => handlers::create_note,
        get "/notes" => handlers::list_notes,
        post "/notes" => handlers::create_note,
        get "/notes/{id}" => handlers::get_note,
        patch "/notes/{id}" => handlers::update_note,
        delete "/notes/{id}" => handlers::delete_note,
    });

    system_routes
        .merge(note_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
