//! Unified error types for the customer manager
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `AppError`: Start-up errors (configuration, connection, schema)

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// A unique constraint rejected the write (e.g. duplicate email)
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Map a SeaORM error raised by a read
    pub fn from_read(err: DbErr) -> Self {
        DomainError::Database(err.to_string())
    }

    /// Map a SeaORM error raised by an insert or update.
    ///
    /// Unique constraint violations become `AlreadyExists` so the caller can
    /// report them as a duplicate rather than a generic failure.
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::AlreadyExists(detail),
            _ => DomainError::Database(err.to_string()),
        }
    }
}

/// Start-up errors surfaced by `main`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Database connection timed out after {0} seconds")]
    ConnectionTimeout(u64),

    #[error("Schema migration failed: {0}")]
    Migration(String),
}
