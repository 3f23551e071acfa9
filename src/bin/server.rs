//! Tally server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the host layer. A bare run upgrades the schema and serves; the
//! `migrate` subcommand runs the schema upgrade once and exits.

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use tally::db::{Database, DbError, SqliteDatabase};
use tally::paths;
use tally::server::{self, Config, ServeError};
use tally::store::{CreateMode, ListStore};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(tally::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(tally::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(tally::binary::serve))]
    Serve(#[from] ServeError),
}

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Channel-scoped list MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8001")]
    port: u16,

    /// Database file path (defaults to data/lists.db, or TALLY_DATA_DIR/lists.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Reject items for lists that were never explicitly created,
    /// instead of creating the list on first reference
    #[arg(long)]
    strict_lists: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply schema upgrades to the store file and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let db_path = cli.db.unwrap_or_else(paths::db_path);

    // Ensure the data directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    match cli.command {
        Some(Commands::Migrate) => {
            // Failure propagates as an error and exits with status 1
            db.migrate().await?;
            println!("Migration completed successfully");
        }
        None => {
            db.migrate().await?;

            let create_mode = if cli.strict_lists {
                CreateMode::Strict
            } else {
                CreateMode::AutoCreate
            };
            let store = ListStore::new(Arc::new(db), create_mode);

            server::run(
                Config {
                    host: cli.host,
                    port: cli.port,
                },
                store,
            )
            .await?;
        }
    }

    Ok(())
}
