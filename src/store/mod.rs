//! Channel-scoped list operations.
//!
//! Every operation here is an independent unit of work that resolves to a
//! human-readable message string, success or failure, so the tool layer
//! never has to translate errors of its own. Outcomes are tagged internally
//! (`DbResult` plus outcome enums) and rendered to strings only at this
//! boundary.

use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::db::utils::{current_timestamp, format_timestamp};
use crate::db::{
    Database, DbError, DbResult, ItemRepository, ItemStatus, ListItem, ListRepository,
};


/// Behavior of `add_list_item` when the target list does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Create the list on first reference.
    #[default]
    AutoCreate,
    /// Reject items for lists that were never explicitly created.
    Strict,
}

/// The set of operations exposed to the tool-routing layer.
///
/// Generic over `D: Database`; the handle is constructed once at startup
/// and shared by reference into every call.
pub struct ListStore<D: Database> {
    db: Arc<D>,
    create_mode: CreateMode,
}

enum AddOutcome {
    Created { item: ListItem },
    Added { item: ListItem },
    ListMissing,
}

enum ItemsOutcome {
    Items(Vec<ListItem>),
    ListMissing,
}

enum CompleteOutcome {
    Completed,
    ListMissing,
    ItemMissing,
}

impl<D: Database> ListStore<D> {
    pub fn new(db: Arc<D>, create_mode: CreateMode) -> Self {
        Self { db, create_mode }
    }

    /// Create a new list unconditionally. No duplicate check: a second list
    /// with the same (channel, name) becomes a distinct row.
    #[instrument(skip(self))]
    pub async fn create_list(&self, channel_id: &str, list_name: &str) -> String {
        match self.db.lists().create(channel_id, list_name).await {
            Ok(list) => format!(
                "Created list '{}' with id {} in channel {}",
                list.name, list.id, list.channel_id
            ),
            Err(e) => {
                error!(error = %e, "create_list failed");
                format!("Error creating list: {e}")
            }
        }
    }

    /// Add an item to a list, creating the list first when the configured
    /// mode allows it.
    #[instrument(skip(self))]
    pub async fn add_list_item(&self, channel_id: &str, list_name: &str, item_name: &str) -> String {
        match self.add_item(channel_id, list_name, item_name).await {
            Ok(AddOutcome::Created { item }) => {
                format!("Created list '{list_name}' and added '{}'", item.name)
            }
            Ok(AddOutcome::Added { item }) => {
                format!("Added '{}' to list '{list_name}'", item.name)
            }
            Ok(AddOutcome::ListMissing) => {
                debug!(channel_id, list_name, "list not found");
                format!("List '{list_name}' not found in channel {channel_id}")
            }
            Err(e) => {
                error!(error = %e, "add_list_item failed");
                format!("Error adding list item: {e}")
            }
        }
    }

    /// Get lists, scoped to a channel when one is given.
    #[instrument(skip(self))]
    pub async fn get_lists(&self, channel_id: Option<&str>) -> String {
        match self.db.lists().list(channel_id).await {
            Ok(lists) if lists.is_empty() => match channel_id {
                Some(_) => "No lists found for this channel".to_string(),
                None => "No lists found".to_string(),
            },
            Ok(lists) => {
                let lines: Vec<String> = match channel_id {
                    Some(_) => lists.iter().map(|l| format!("{}: {}", l.id, l.name)).collect(),
                    None => lists
                        .iter()
                        .map(|l| format!("{}: [{}] {}", l.id, l.channel_id, l.name))
                        .collect(),
                };
                lines.join("\n").trim_end().to_string()
            }
            Err(e) => {
                error!(error = %e, "get_lists failed");
                format!("Error fetching lists: {e}")
            }
        }
    }

    /// Get the items of a list as a 1-indexed listing, hiding completed
    /// items unless `show_completed` is set.
    #[instrument(skip(self))]
    pub async fn get_list_items(
        &self,
        channel_id: &str,
        list_name: &str,
        show_completed: bool,
    ) -> String {
        match self.fetch_items(channel_id, list_name, show_completed).await {
            Ok(ItemsOutcome::ListMissing) => {
                format!("List '{list_name}' not found in channel {channel_id}")
            }
            Ok(ItemsOutcome::Items(items)) if items.is_empty() => {
                format!("No items found in list '{list_name}'")
            }
            Ok(ItemsOutcome::Items(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| render_item_line(idx + 1, item))
                .collect::<Vec<_>>()
                .join("\n")
                .trim_end()
                .to_string(),
            Err(e) => {
                error!(error = %e, "get_list_items failed");
                format!("Error fetching list items: {e}")
            }
        }
    }

    /// Mark an active item completed. An already-completed item and one
    /// that never existed report the same not-found message.
    #[instrument(skip(self))]
    pub async fn complete_list_item(
        &self,
        channel_id: &str,
        list_name: &str,
        item_name: &str,
    ) -> String {
        match self.complete_item(channel_id, list_name, item_name).await {
            Ok(CompleteOutcome::Completed) => {
                format!("Completed '{item_name}' in list '{list_name}'")
            }
            Ok(CompleteOutcome::ListMissing) => {
                format!("List '{list_name}' not found in channel {channel_id}")
            }
            Ok(CompleteOutcome::ItemMissing) => {
                debug!(channel_id, list_name, item_name, "active item not found");
                format!("No active item '{item_name}' found in list '{list_name}'")
            }
            Err(e) => {
                error!(error = %e, "complete_list_item failed");
                format!("Error completing list item: {e}")
            }
        }
    }

    async fn add_item(
        &self,
        channel_id: &str,
        list_name: &str,
        item_name: &str,
    ) -> DbResult<AddOutcome> {
        let lists = self.db.lists();
        match lists.find_by_name(channel_id, list_name).await? {
            Some(list) => {
                let item = self.db.items().create(list.id, item_name).await?;
                Ok(AddOutcome::Added { item })
            }
            None => match self.create_mode {
                CreateMode::Strict => Ok(AddOutcome::ListMissing),
                CreateMode::AutoCreate => {
                    // Races with a concurrent identical call: both may miss
                    // the lookup and insert, leaving duplicate lists behind.
                    let list = lists.create(channel_id, list_name).await?;
                    let item = self.db.items().create(list.id, item_name).await?;
                    Ok(AddOutcome::Created { item })
                }
            },
        }
    }

    async fn fetch_items(
        &self,
        channel_id: &str,
        list_name: &str,
        show_completed: bool,
    ) -> DbResult<ItemsOutcome> {
        let Some(list) = self.db.lists().find_by_name(channel_id, list_name).await? else {
            return Ok(ItemsOutcome::ListMissing);
        };
        let items = self.db.items().list_for_list(list.id, show_completed).await?;
        Ok(ItemsOutcome::Items(items))
    }

    async fn complete_item(
        &self,
        channel_id: &str,
        list_name: &str,
        item_name: &str,
    ) -> DbResult<CompleteOutcome> {
        let Some(list) = self.db.lists().find_by_name(channel_id, list_name).await? else {
            return Ok(CompleteOutcome::ListMissing);
        };

        let items = self.db.items();
        let Some(item) = items.find_active(list.id, item_name).await? else {
            return Ok(CompleteOutcome::ItemMissing);
        };

        match items.complete(item.id, &current_timestamp()).await {
            Ok(()) => Ok(CompleteOutcome::Completed),
            // Completed between the lookup and the update; same answer as
            // never having existed.
            Err(DbError::NotFound { .. }) => Ok(CompleteOutcome::ItemMissing),
            Err(e) => Err(e),
        }
    }
}

fn render_item_line(index: usize, item: &ListItem) -> String {
    match (&item.status, &item.completed_at) {
        (ItemStatus::Completed, Some(completed)) => format!(
            "{index}. {} \u{2713} (added {}, completed {})",
            item.name,
            format_timestamp(&item.created_at),
            format_timestamp(completed)
        ),
        _ => format!(
            "{index}. {} (added {})",
            item.name,
            format_timestamp(&item.created_at)
        ),
    }
}
