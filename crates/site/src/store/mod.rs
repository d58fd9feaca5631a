//! The site store: typed, in-memory state mirrored to blob storage.
//!
//! `SiteStore` is owned by the composition root (the server's `AppState`,
//! or a local value in the CLI) and handed to services by reference. It
//! loads all four blobs once at open time, validating every record, and
//! writes the affected blob back after each mutation.
//!
//! Mutations persist first and commit to memory second, so a failed write
//! leaves the in-memory state matching what was last stored.
//!
//! # Operations
//!
//! - [`users`] - roster reads, user insertion (email uniqueness)
//! - [`session`] - the single current-member pointer
//! - [`activities`] - reward listings, newest first
//! - [`stats`] - headline stats

pub mod activities;
pub mod session;
pub mod stats;
pub mod users;

use thiserror::Error;

use crate::models::{Activity, Member, Stats, User};
use crate::storage::{BlobStore, MemoryBlobStore, StorageError, keys, load_json};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a blob failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Uniqueness violation (e.g., an email already registered).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Site state backed by a [`BlobStore`].
pub struct SiteStore {
    backend: Box<dyn BlobStore>,
    users: Vec<User>,
    session: Option<Member>,
    stats: Stats,
    activities: Vec<Activity>,
}

impl SiteStore {
    /// Open a store over `backend`, loading and validating every blob.
    ///
    /// Missing blobs load as their empty/default values.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if any blob holds malformed records,
    /// or the backend's error if a read fails.
    pub fn open(backend: impl BlobStore + 'static) -> Result<Self, StorageError> {
        let backend: Box<dyn BlobStore> = Box::new(backend);

        let users: Vec<User> = load_json(backend.as_ref(), keys::USERS)?.unwrap_or_default();
        // A logged-out session may be stored as a literal `null`.
        let session = load_json::<Option<Member>>(backend.as_ref(), keys::SESSION)?.flatten();
        let stats: Stats = load_json(backend.as_ref(), keys::STATS)?.unwrap_or_default();
        let activities: Vec<Activity> =
            load_json(backend.as_ref(), keys::ACTIVITIES)?.unwrap_or_default();

        tracing::info!(
            users = users.len(),
            activities = activities.len(),
            logged_in = session.is_some(),
            "Site store loaded"
        );

        Ok(Self {
            backend,
            users,
            session,
            stats,
            activities,
        })
    }

    /// An empty store that persists nowhere.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBlobStore::new()),
            users: Vec::new(),
            session: None,
            stats: Stats::default(),
            activities: Vec::new(),
        }
    }

    fn backend_mut(&mut self) -> &mut dyn BlobStore {
        self.backend.as_mut()
    }
}

impl std::fmt::Debug for SiteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteStore")
            .field("users", &self.users.len())
            .field("session", &self.session.as_ref().map(|m| &m.email))
            .field("stats", &self.stats)
            .field("activities", &self.activities.len())
            .finish_non_exhaustive()
    }
}
