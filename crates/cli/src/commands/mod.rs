//! Command implementations.
//!
//! Every command loads configuration the same way the server does and
//! opens the file store under `OC_DATA_DIR`.

pub mod activities;
pub mod describe;
pub mod members;
pub mod stats;

use ocean_clean_site::config::{ConfigError, SiteConfig};
use ocean_clean_site::gemini::{GeminiClient, GeminiError};
use ocean_clean_site::services::{ActivityError, DescriptionService};
use ocean_clean_site::storage::{FileBlobStore, StorageError};
use ocean_clean_site::store::{SiteStore, StoreError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Activity(#[from] ActivityError),

    #[error("Gemini client error: {0}")]
    Gemini(#[from] GeminiError),

    /// A destructive command was run without confirmation.
    #[error("refusing to {0} without --yes")]
    NotConfirmed(&'static str),
}

/// Load configuration and open the store it points at.
fn open_store() -> Result<(SiteConfig, SiteStore), CommandError> {
    let config = SiteConfig::from_env()?;
    let backend = FileBlobStore::open(&config.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening site data");
    let store = SiteStore::open(backend)?;
    Ok((config, store))
}

/// Build the description service from configuration.
fn description_service(config: &SiteConfig) -> Result<DescriptionService, CommandError> {
    let client = config.gemini.as_ref().map(GeminiClient::new).transpose()?;
    Ok(DescriptionService::new(client))
}
