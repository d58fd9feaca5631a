//! Headline stats.

use super::{SiteStore, StoreError};
use crate::models::Stats;
use crate::storage::{keys, save_json};

impl SiteStore {
    /// Current stats (defaults until first set).
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Overwrite the stats and persist `oc_stats`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the write fails.
    pub fn update_stats(&mut self, stats: Stats) -> Result<(), StoreError> {
        save_json(self.backend_mut(), keys::STATS, &stats)?;
        tracing::info!(tons = %stats.tons, years = %stats.years, prob = %stats.prob, "Stats updated");
        self.stats = stats;
        Ok(())
    }
}
