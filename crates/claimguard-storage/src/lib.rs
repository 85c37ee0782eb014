//! # claimguard-storage
//!
//! [`IStateStore`] backends for the coordinator snapshot.
//!
//! - [`JsonFileStore`]: one JSON document, replaced atomically via rename.
//! - [`SqliteStore`]: a single-row table in a SQLite database.
//! - [`MemoryStore`]: process-local, for tests and ephemeral runs.

pub mod json_store;
pub mod memory_store;
pub mod pragmas;
pub mod sqlite_store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

use std::path::Path;

use claimguard_core::config::{StorageBackend, StorageConfig};
use claimguard_core::errors::StorageError;
use claimguard_core::traits::IStateStore;

/// Open the backend named by `config`.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn IStateStore>, StorageError> {
    let store: Box<dyn IStateStore> = match config.backend {
        StorageBackend::Json => Box::new(JsonFileStore::new(&config.path)),
        StorageBackend::Sqlite => Box::new(SqliteStore::open(Path::new(&config.path))?),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    tracing::debug!(backend = store.name(), path = %config.path, "state store opened");
    Ok(store)
}

pub(crate) fn to_sqlite_err(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}
