//! File-backed blob store: one `<key>.json` file per blob.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BlobStore, StorageError, validate_key};

/// Blob store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "Opened file blob store");
        Ok(Self { dir })
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value).map_err(|source| StorageError::Io {
            key: key.to_owned(),
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("oc-blobs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = temp_dir();
        let store = FileBlobStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_write_read_remove() {
        let dir = temp_dir();
        let mut store = FileBlobStore::open(&dir).unwrap();

        assert!(store.read("oc_stats").unwrap().is_none());

        store.write("oc_stats", "{\"tons\":\"1\"}").unwrap();
        assert_eq!(
            store.read("oc_stats").unwrap().as_deref(),
            Some("{\"tons\":\"1\"}")
        );
        assert!(dir.join("oc_stats.json").is_file());

        store.remove("oc_stats").unwrap();
        assert!(store.read("oc_stats").unwrap().is_none());

        // Removing again is fine.
        store.remove("oc_stats").unwrap();
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = temp_dir();
        let mut store = FileBlobStore::open(&dir).unwrap();
        assert!(matches!(
            store.write("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        std::fs::remove_dir_all(dir).ok();
    }
}
