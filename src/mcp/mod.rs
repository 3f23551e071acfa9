//! Model Context Protocol (MCP) server implementation
//!
//! This module provides an MCP server using the Streamable HTTP transport.
//! The server exposes tools for managing channel-scoped lists and their
//! items. Each tool resolves to a message string produced by the store;
//! the transport layer never sees an unhandled failure.

pub mod server;
mod service;

#[cfg(test)]
mod service_test;

pub use server::McpServer;
pub use service::create_mcp_service;
