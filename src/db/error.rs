//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(tally::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(tally::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(tally::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(tally::db::connection_error))]
    Connection { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
