//! Persistent store adapter.
//!
//! Domain state is mirrored to a key/value store as named JSON blobs, one
//! blob per collection. The adapter is injected into the store and the
//! session, so the same logic runs against the filesystem in production and
//! an in-memory map in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Blob key for the equipment collection.
pub const EQUIPMENT_KEY: &str = "gearguard_equipment";
/// Blob key for the team collection.
pub const TEAMS_KEY: &str = "gearguard_teams";
/// Blob key for the maintenance request collection.
pub const REQUESTS_KEY: &str = "gearguard_requests";
/// Blob key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "gearguard_darkMode";
/// Blob key for the work center collection.
pub const WORK_CENTERS_KEY: &str = "gearguard_workCenters";
/// Blob key for the equipment category collection.
pub const CATEGORIES_KEY: &str = "gearguard_categories";
/// Blob key for the registered account list.
pub const USERS_KEY: &str = "gearguard_users";
/// Blob key for the signed-in user.
pub const SESSION_KEY: &str = "gearguard_user";

/// Error from a storage adapter operation.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value interface the domain state is mirrored through.
///
/// Values are complete JSON documents; a write always replaces the whole
/// blob. Implementations take `&self` and are safe to share.
pub trait StorageAdapter: Send + Sync {
    /// Read a blob. `None` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a blob, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a blob. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode one blob. An absent key and an undecodable value both
/// come back as `None`; only adapter failures propagate.
pub(crate) fn read_json<T: DeserializeOwned>(
    adapter: &dyn StorageAdapter,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = adapter.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("discarding unreadable {} blob: {}", key, e);
            Ok(None)
        }
    }
}

/// Encode and write one blob, logging instead of failing: in-memory state
/// stays authoritative even when the mirror write is lost.
pub(crate) fn write_json<T: Serialize>(adapter: &dyn StorageAdapter, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|raw| adapter.set(key, &raw));
    if let Err(e) = result {
        tracing::warn!("failed to persist {}: {}", key, e);
    }
}
