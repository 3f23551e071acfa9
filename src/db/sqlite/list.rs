//! SQLite ListRepository implementation.

use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, List, ListRepository};

/// SQLx-backed list repository.
pub struct SqliteListRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl ListRepository for SqliteListRepository<'_> {
    async fn create(&self, channel_id: &str, name: &str) -> DbResult<List> {
        let result = sqlx::query("INSERT INTO lists (channel_id, name) VALUES (?, ?)")
            .bind(channel_id)
            .bind(name)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        let id = result.last_insert_rowid();

        let row = sqlx::query("SELECT id, channel_id, name, created_at FROM lists WHERE id = ?")
            .bind(id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(row_to_list(&row))
    }

    async fn find_by_name(&self, channel_id: &str, name: &str) -> DbResult<Option<List>> {
        // (channel_id, name) is not unique at the schema level; take the
        // first row by id when duplicates exist.
        let row = sqlx::query(
            "SELECT id, channel_id, name, created_at FROM lists
             WHERE channel_id = ? AND name = ?
             ORDER BY id LIMIT 1",
        )
        .bind(channel_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(row.as_ref().map(row_to_list))
    }

    async fn list(&self, channel_id: Option<&str>) -> DbResult<Vec<List>> {
        let rows = match channel_id {
            Some(channel) => {
                sqlx::query(
                    "SELECT id, channel_id, name, created_at FROM lists
                     WHERE channel_id = ? ORDER BY id",
                )
                .bind(channel)
                .fetch_all(self.pool)
                .await
            }
            None => {
                sqlx::query("SELECT id, channel_id, name, created_at FROM lists ORDER BY id")
                    .fetch_all(self.pool)
                    .await
            }
        }
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(rows.iter().map(row_to_list).collect())
    }
}

/// Convert a database row to a List model.
fn row_to_list(row: &sqlx::sqlite::SqliteRow) -> List {
    List {
        id: row.get("id"),
        channel_id: row.get("channel_id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    }
}
