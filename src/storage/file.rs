//! File-backed storage: one JSON file per key inside a directory.
//!
//! Writes go to a temp file, are fsynced, then renamed over the target so a
//! crash never leaves a half-written value behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStorage, StorageResult};
use crate::error::StorageError;

/// Storage rooted at a directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are plain names; anything that could escape the directory is refused.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if !is_valid_key(key) {
            return Err(StorageError::Unavailable(format!(
                "invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Whether `key` can name a file inside the storage directory: ASCII
/// letters, digits, `-`, `_` and `.`, not starting with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let write_err = |step: &str, e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            message: format!("{}: {}", step, e),
        };

        fs::create_dir_all(&self.dir).map_err(|e| write_err("Failed to create directory", e))?;

        let temp_path = path.with_file_name(format!("{}.json.tmp.{}", key, std::process::id()));
        fs::write(&temp_path, value).map_err(|e| write_err("Failed to write temp file", e))?;

        let file = fs::File::open(&temp_path)
            .map_err(|e| write_err("Failed to open temp file for fsync", e))?;
        file.sync_all().map_err(|e| write_err("Failed to fsync", e))?;

        fs::rename(&temp_path, &path).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ),
        })?;

        tracing::trace!("Wrote storage key '{}' to {}", key, path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_before_any_write_is_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("state"));
        assert_eq!(storage.get("visitedTabs").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested/state"));
        storage.set("visitedTabs", "[\"cancelled\"]").unwrap();

        let path = storage.path_for("visitedTabs").unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "[\"cancelled\"]");
    }

    #[test]
    fn set_overwrites_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("visitedTabs", "[]").unwrap();
        storage.set("visitedTabs", "[\"watchlist\"]").unwrap();

        assert_eq!(
            storage.get("visitedTabs").unwrap().as_deref(),
            Some("[\"watchlist\"]")
        );
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {:?}", leftovers);
    }

    #[test]
    fn remove_deletes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("visitedTabs", "[]").unwrap();
        storage.remove("visitedTabs").unwrap();
        assert_eq!(storage.get("visitedTabs").unwrap(), None);
        assert!(storage.remove("visitedTabs").is_ok());
    }

    #[test]
    fn keys_cannot_escape_directory() {
        let storage = FileStorage::new("/tmp/state");
        for key in ["", "../etc/passwd", "a/b", ".hidden"] {
            assert!(
                storage.path_for(key).is_err(),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn key_rule_accepts_plain_names() {
        for key in ["visitedTabs", "visited-tabs", "tabs_v2", "tabs.v2"] {
            assert!(is_valid_key(key), "key {:?} should be accepted", key);
        }
        assert!(!is_valid_key("visited tabs"));
    }

    #[test]
    fn write_into_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut storage = FileStorage::new(blocker.join("state"));
        let err = storage.set("visitedTabs", "[]").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
