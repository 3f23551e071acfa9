//! HTTP host for the MCP service.

use std::net::IpAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::mcp::create_mcp_service;
use crate::store::ListStore;


/// Server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().unwrap(),
            port: 8001,
        }
    }
}

/// Errors from running the HTTP host.
#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(tally::server::bind))]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(tally::server::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn health() -> &'static str {
    "ok"
}

/// Build the router with the MCP service nested at /mcp.
fn build_router<D: Database + 'static>(
    store: Arc<ListStore<D>>,
    cancellation_token: CancellationToken,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", create_mcp_service(store, cancellation_token))
}

/// Run the server with the given configuration
pub async fn run<D: Database + 'static>(
    config: Config,
    store: ListStore<D>,
) -> Result<(), ServeError> {
    init_tracing();

    let ct = CancellationToken::new();
    let app = build_router(Arc::new(store), ct.clone()).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(ct))
        .await?;
    Ok(())
}

/// Wait for ctrl-c, then cancel open MCP sessions.
async fn shutdown_signal(ct: CancellationToken) {
    let _ = tokio::signal::ctrl_c().await;
    ct.cancel();
}
