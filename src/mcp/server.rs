//! MCP tools for list management.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::store::ListStore;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Channel the list is scoped to")]
    pub channel_id: String,
    #[schemars(description = "Name of the list to create")]
    pub list_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddListItemParams {
    #[schemars(description = "Channel the list is scoped to")]
    pub channel_id: String,
    #[schemars(description = "Name of the target list")]
    pub list_name: String,
    #[schemars(description = "Name of the item to add")]
    pub item_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListsParams {
    #[schemars(description = "Restrict to this channel; omit to list all channels")]
    pub channel_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListItemsParams {
    #[schemars(description = "Channel the list is scoped to")]
    pub channel_id: String,
    #[schemars(description = "Name of the list to read")]
    pub list_name: String,
    #[schemars(description = "Include completed items (default: false)")]
    pub show_completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CompleteListItemParams {
    #[schemars(description = "Channel the list is scoped to")]
    pub channel_id: String,
    #[schemars(description = "Name of the list holding the item")]
    pub list_name: String,
    #[schemars(description = "Name of the active item to complete")]
    pub item_name: String,
}

/// MCP server exposing the list store operations as tools.
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic
/// dispatch). One instance is created per transport session; all share the
/// same store.
pub struct McpServer<D: Database> {
    store: Arc<ListStore<D>>,
    tool_router: ToolRouter<Self>,
}

impl<D: Database> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_router]
impl<D: Database + 'static> McpServer<D> {
    pub fn new(store: Arc<ListStore<D>>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Create a new named list in a channel")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = self
            .store
            .create_list(&params.0.channel_id, &params.0.list_name)
            .await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(description = "Add an item to a channel's list")]
    pub async fn add_list_item(
        &self,
        params: Parameters<AddListItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = self
            .store
            .add_list_item(
                &params.0.channel_id,
                &params.0.list_name,
                &params.0.item_name,
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(description = "Get lists, optionally scoped to one channel")]
    pub async fn get_lists(
        &self,
        params: Parameters<GetListsParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = self.store.get_lists(params.0.channel_id.as_deref()).await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(description = "Get the items of a channel's list")]
    pub async fn get_list_items(
        &self,
        params: Parameters<GetListItemsParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = self
            .store
            .get_list_items(
                &params.0.channel_id,
                &params.0.list_name,
                params.0.show_completed.unwrap_or(false),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(description = "Mark an active item in a channel's list as completed")]
    pub async fn complete_list_item(
        &self,
        params: Parameters<CompleteListItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let message = self
            .store
            .complete_list_item(
                &params.0.channel_id,
                &params.0.list_name,
                &params.0.item_name,
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }
}

#[tool_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Tally MCP server - manage channel-scoped lists and their items".to_string(),
        );
        info
    }
}
