//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::SiteConfig;
use crate::gemini::{GeminiClient, GeminiError};
use crate::services::{AdminGate, DescriptionService};
use crate::store::SiteStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store sits behind an async mutex;
/// handlers hold the lock for the duration of one store operation.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: Mutex<SiteStore>,
    admin: AdminGate,
    descriptions: DescriptionService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini client cannot be built from the config.
    pub fn new(config: SiteConfig, store: SiteStore) -> Result<Self, GeminiError> {
        let client = config.gemini.as_ref().map(GeminiClient::new).transpose()?;
        let admin = AdminGate::new(config.admin_secret.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(store),
                admin,
                descriptions: DescriptionService::new(client),
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// The site store.
    #[must_use]
    pub fn store(&self) -> &Mutex<SiteStore> {
        &self.inner.store
    }

    #[must_use]
    pub fn admin(&self) -> &AdminGate {
        &self.inner.admin
    }

    #[must_use]
    pub fn descriptions(&self) -> &DescriptionService {
        &self.inner.descriptions
    }
}
