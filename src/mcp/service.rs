//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;
use crate::store::ListStore;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// This function creates a StreamableHttpService that can be nested into an
/// Axum router.
///
/// # Arguments
/// * `store` - The shared list store the tools operate on
/// * `cancellation_token` - Token for graceful shutdown
pub fn create_mcp_service<D: Database + 'static>(
    store: impl Into<Arc<ListStore<D>>>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<D>, LocalSessionManager> {
    let store = store.into();

    // Service factory: creates new McpServer instance per session
    // Note: Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<D>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&store)))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None;
    config.sse_retry = None;
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
