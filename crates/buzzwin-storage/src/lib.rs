//! # buzzwin-storage
//!
//! SQLite persistence for the engagement subsystem. One serialized write
//! connection, a round-robin read pool for file-backed databases, schema
//! migrations keyed on `PRAGMA user_version`, and [`StorageEngine`], which
//! implements every storage trait from `buzzwin-core`.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use buzzwin_core::errors::{BuzzwinError, StorageError};

/// Wrap a low-level SQLite failure message.
pub(crate) fn to_storage_err(message: impl Into<String>) -> BuzzwinError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
