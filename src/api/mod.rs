//! HTTP API server.
//!
//! Thin axum layer over the data-access traits: each request gets its own
//! session, handlers translate results and errors into JSON responses.

mod error;
mod handlers;
pub mod routes;
mod session;
mod state;

#[cfg(test)]
mod mod_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{MessageResponse, NoteRequest, NoteResponse};
pub use session::DbSession;
pub use state::AppState;

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and store handle.
///
/// Creates the schema if absent before accepting requests and closes the
/// connection pool once the server has shut down.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    info!("Server starting");
    db.init_schema().await?;

    let state = AppState::new(db);
    let app = routes::create_router(state.clone()).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown");
    state.db().close().await;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
