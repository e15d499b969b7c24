//! In-memory storage adapter for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{StorageAdapter, StorageError};

/// Holds blobs in a mutex-guarded map; contents are gone when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means some thread panicked mid-write; the map
        // underneath is still a valid string table.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageAdapter for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let store = MemoryStore::new();
        assert!(store.get("gearguard_test").unwrap().is_none());

        store.set("gearguard_test", "value").unwrap();
        assert_eq!(
            store.get("gearguard_test").unwrap().as_deref(),
            Some("value")
        );

        store.delete("gearguard_test").unwrap();
        assert!(store.get("gearguard_test").unwrap().is_none());
    }
}
