//! Notes API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use notes_api::api::{self, ApiError, Config};
use notes_api::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(notes_api::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(notes_api::binary::api))]
    Api(#[from] ApiError),

    #[error("Refusing to reset the database without confirmation")]
    #[diagnostic(
        code(notes_api::binary::unconfirmed),
        help("re-run with --yes to drop every stored note")
    )]
    Unconfirmed,
}

#[derive(Parser, Debug)]
#[command(name = "notes-api")]
#[command(author, version, about = "Note-taking HTTP service", long_about = None)]
struct Cli {
    /// Database URL
    #[arg(
        long,
        global = true,
        env = "DATABASE_URL",
        default_value = "sqlite://notes.db"
    )]
    database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, global = true, env = "NOTES_MAX_CONNECTIONS", default_value = "5")]
    max_connections: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Drop and recreate the notes table, destroying all notes
    ResetDb {
        /// Confirm the destructive reset
        #[arg(long)]
        yes: bool,
    },
}

impl Cli {
    fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| {
            let config = Config::default();
            Command::Serve {
                host: config.host,
                port: config.port,
            }
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    match cli.command() {
        Command::Serve { host, port } => {
            let db = SqliteDatabase::connect(&cli.database_url, cli.max_connections).await?;
            api::run(Config { host, port }, db).await?;
        }
        Command::ResetDb { yes } => {
            if !yes {
                return Err(BinaryError::Unconfirmed);
            }
            let db = SqliteDatabase::connect(&cli.database_url, 1).await?;
            db.reset().await?;
            db.close().await;
            info!("Database reset complete");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["notes-api", "--database-url", "sqlite::memory:"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: "0.0.0.0".parse().unwrap(),
                port: 8000,
            }
        );
        assert_eq!(cli.database_url, "sqlite::memory:");
    }

    #[test]
    fn parses_serve_options() {
        let cli = Cli::try_parse_from([
            "notes-api",
            "serve",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--max-connections",
            "2",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: "127.0.0.1".parse().unwrap(),
                port: 9000,
            }
        );
        assert_eq!(cli.max_connections, 2);
    }

    #[test]
    fn reset_db_requires_explicit_flag_to_confirm() {
        let cli = Cli::try_parse_from(["notes-api", "reset-db"]).unwrap();
        assert_eq!(cli.command(), Command::ResetDb { yes: false });

        let cli = Cli::try_parse_from(["notes-api", "reset-db", "--yes"]).unwrap();
        assert_eq!(cli.command(), Command::ResetDb { yes: true });
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Cli::try_parse_from(["notes-api", "serve", "--port", "70000"]).is_err());
    }
}
