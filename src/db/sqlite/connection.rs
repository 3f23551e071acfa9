//! SQLite database connection and schema management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::{SqliteItemRepository, SqliteListRepository};
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic
/// dispatch. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Each pooled connection would otherwise see its own empty in-memory
    /// store, so the pool is pinned to a single long-lived connection.
    pub async fn in_memory() -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Access the underlying pool.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Lists<'a> = SqliteListRepository<'a>;
    type Items<'a> = SqliteItemRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| DbError::Migration {
            message: e.to_string(),
        })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS lists (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 channel_id TEXT NOT NULL,
                 name TEXT NOT NULL,
                 created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
             )",
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
        })?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS list_items (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 list_id INTEGER NOT NULL,
                 name TEXT NOT NULL,
                 status TEXT DEFAULT 'active',
                 created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                 completed_at TIMESTAMP,
                 FOREIGN KEY (list_id) REFERENCES lists (id)
             )",
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
        })?;

        // Stores created before completion tracking lack these columns.
        let columns: Vec<String> =
            sqlx::query_scalar("SELECT name FROM pragma_table_info('list_items')")
                .fetch_all(&mut *tx)
                .await
                .map_err(|e| DbError::Migration {
                    message: e.to_string(),
                })?;

        if !columns.iter().any(|c| c == "status") {
            sqlx::query("ALTER TABLE list_items ADD COLUMN status TEXT DEFAULT 'active'")
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::Migration {
                    message: e.to_string(),
                })?;
        }

        if !columns.iter().any(|c| c == "completed_at") {
            sqlx::query("ALTER TABLE list_items ADD COLUMN completed_at TIMESTAMP")
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::Migration {
                    message: e.to_string(),
                })?;
        }

        tx.commit().await.map_err(|e| DbError::Migration {
            message: e.to_string(),
        })
    }

    fn lists(&self) -> Self::Lists<'_> {
        SqliteListRepository { pool: &self.pool }
    }

    fn items(&self) -> Self::Items<'_> {
        SqliteItemRepository { pool: &self.pool }
    }
}
