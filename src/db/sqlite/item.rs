//! SQLite ItemRepository implementation.

use std::str::FromStr;

use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, Id, ItemRepository, ItemStatus, ListItem};

/// SQLx-backed list item repository.
pub struct SqliteItemRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl ItemRepository for SqliteItemRepository<'_> {
    async fn create(&self, list_id: Id, name: &str) -> DbResult<ListItem> {
        let result = sqlx::query("INSERT INTO list_items (list_id, name) VALUES (?, ?)")
            .bind(list_id)
            .bind(name)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        let id = result.last_insert_rowid();

        let row = sqlx::query(
            "SELECT id, list_id, name, status, created_at, completed_at
             FROM list_items WHERE id = ?",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(row_to_item(&row))
    }

    async fn list_for_list(&self, list_id: Id, include_completed: bool) -> DbResult<Vec<ListItem>> {
        // Same-second inserts tie on created_at; id keeps insertion order.
        let sql = if include_completed {
            "SELECT id, list_id, name, status, created_at, completed_at
             FROM list_items WHERE list_id = ?
             ORDER BY created_at, id"
        } else {
            "SELECT id, list_id, name, status, created_at, completed_at
             FROM list_items WHERE list_id = ? AND status = 'active'
             ORDER BY created_at, id"
        };

        let rows = sqlx::query(sql)
            .bind(list_id)
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    async fn find_active(&self, list_id: Id, name: &str) -> DbResult<Option<ListItem>> {
        let row = sqlx::query(
            "SELECT id, list_id, name, status, created_at, completed_at
             FROM list_items
             WHERE list_id = ? AND name = ? AND status = 'active'
             ORDER BY id LIMIT 1",
        )
        .bind(list_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(row.as_ref().map(row_to_item))
    }

    async fn complete(&self, item_id: Id, completed_at: &str) -> DbResult<()> {
        // Status and completion timestamp move together; the status guard
        // makes re-completion indistinguishable from a missing item.
        let result = sqlx::query(
            "UPDATE list_items SET status = 'completed', completed_at = ?
             WHERE id = ? AND status = 'active'",
        )
        .bind(completed_at)
        .bind(item_id)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity_type: "ListItem".to_string(),
                id: item_id.to_string(),
            });
        }

        Ok(())
    }
}

/// Convert a database row to a ListItem model.
fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> ListItem {
    ListItem {
        id: row.get("id"),
        list_id: row.get("list_id"),
        name: row.get("name"),
        status: {
            let status_str: String = row.get("status");
            ItemStatus::from_str(&status_str).unwrap_or_default()
        },
        created_at: row.get("created_at"),
        completed_at: row.get("completed_at"),
    }
}
