//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, in-memory, etc.)
//! to be swapped without changing business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (List, ListItem)
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed SQLite implementation

mod error;
mod models;
mod repository;
mod sqlite;

pub mod utils;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{SqliteDatabase, SqliteItemRepository, SqliteListRepository};
