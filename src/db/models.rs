//! Domain models for channel-scoped lists.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Row identifier assigned by the storage backend.
pub type Id = i64;

/// A named, channel-scoped container of items.
///
/// (channel_id, name) is not unique at the storage level; lookups that
/// expect a single match take the first row by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: Id,
    pub channel_id: String,
    pub name: String,
    pub created_at: String,
}

/// An individual unit of work belonging to exactly one list.
///
/// `completed_at` is non-null exactly when `status` is completed; the
/// completion path sets both together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Id,
    pub list_id: Id,
    pub name: String,
    pub status: ItemStatus,
    pub created_at: String,
    pub completed_at: Option<String>,
}

/// Completion state of a list item.
///
/// Items start active and move to completed exactly once; they are never
/// reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Completed,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Active => write!(f, "active"),
            ItemStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ItemStatus::Active),
            "completed" => Ok(ItemStatus::Completed),
            _ => Err(format!("Unknown item status: {}", s)),
        }
    }
}
