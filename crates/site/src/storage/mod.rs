//! Named JSON blob storage.
//!
//! All persistent site state lives in four named text blobs, each holding
//! one JSON document:
//!
//! | Key             | Contents                              |
//! |-----------------|---------------------------------------|
//! | `oc_session`    | the logged-in member profile, or null |
//! | `oc_stats`      | `{tons, years, prob}`                 |
//! | `oc_activities` | reward listings, newest first         |
//! | `oc_users`      | registered users, signup order        |
//!
//! Backends implement [`BlobStore`]: [`FileBlobStore`] keeps one
//! `<key>.json` file per blob in a data directory, [`MemoryBlobStore`]
//! keeps them in a map (tests and dry runs).

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Blob keys used by the site.
pub mod keys {
    /// The current session (a member profile or `null`).
    pub const SESSION: &str = "oc_session";
    /// Headline stats.
    pub const STATS: &str = "oc_stats";
    /// Reward listings.
    pub const ACTIVITIES: &str = "oc_activities";
    /// Registered users.
    pub const USERS: &str = "oc_users";
}

/// Errors that can occur while reading or writing blobs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed to read or write.
    #[error("storage I/O error for {key}: {source}")]
    Io {
        /// Blob key.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to encode {key}: {source}")]
    Encode {
        /// Blob key.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A stored blob is not valid JSON or holds records that fail validation.
    #[error("corrupt blob {key}: {message}")]
    Corrupt {
        /// Blob key.
        key: String,
        /// What was wrong with it.
        message: String,
    },

    /// The key contains characters a backend cannot store.
    #[error("invalid blob key: {0}")]
    InvalidKey(String),
}

/// A key-value store of named JSON text blobs.
///
/// Reads take `&self`; writes take `&mut self` since the store is owned by a
/// single `SiteStore` and every mutation goes through it.
pub trait BlobStore: Send + Sync {
    /// Read a blob. Returns `None` when the key has never been written or
    /// has been removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (create or overwrite) a blob.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a blob. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON blob.
///
/// # Errors
///
/// Returns `StorageError::Corrupt` if the blob does not decode into `T`
/// (including records rejected by `T`'s validation), or the backend's error.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn BlobStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.read(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt {
            key: key.to_owned(),
            message: e.to_string(),
        })
}

/// Encode a value as JSON and write it.
///
/// # Errors
///
/// Returns `StorageError::Encode` if serialization fails, or the backend's error.
pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;
    store.write(key, &raw)
}

/// Check that a key is safe to use as a file stem.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_blob_is_none() {
        let store = MemoryBlobStore::new();
        let value: Option<Vec<String>> = load_json(&store, keys::USERS).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryBlobStore::new();
        save_json(&mut store, keys::STATS, &vec!["a", "b"]).unwrap();
        let value: Option<Vec<String>> = load_json(&store, keys::STATS).unwrap();
        assert_eq!(value.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_load_corrupt_blob() {
        let store = MemoryBlobStore::new().with_blob(keys::ACTIVITIES, "{not json");
        let result: Result<Option<Vec<String>>, _> = load_json(&store, keys::ACTIVITIES);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_validate_key() {
        assert!(validate_key("oc_users").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("OC_USERS").is_err());
    }
}
