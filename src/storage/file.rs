//! Filesystem-backed storage adapter: one JSON file per blob key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StorageAdapter, StorageError};

/// Stores each blob as `<root>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(root)?;
        Ok(FileStore {
            root: root.to_path_buf(),
        })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageAdapter for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.blob_path(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("gearguard_test", r#"{"hello":"world"}"#).unwrap();
        let value = store.get("gearguard_test").unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"hello":"world"}"#));
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("gearguard_missing").unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("gearguard_test", "1").unwrap();
        store.set("gearguard_test", "2").unwrap();
        assert_eq!(store.get("gearguard_test").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("gearguard_test", "1").unwrap();
        store.delete("gearguard_test").unwrap();
        store.delete("gearguard_test").unwrap();
        assert!(store.get("gearguard_test").unwrap().is_none());
    }

    #[test]
    fn test_reopen_sees_existing_blobs() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set("gearguard_test", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get("gearguard_test").unwrap().as_deref(),
            Some("persisted")
        );
    }
}
