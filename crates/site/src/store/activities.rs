//! Reward listing operations.

use super::{SiteStore, StoreError};
use crate::models::Activity;
use crate::storage::{keys, save_json};

impl SiteStore {
    /// Listings, newest first.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Put `activity` at the front and persist `oc_activities`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the write fails.
    pub fn prepend_activity(&mut self, activity: Activity) -> Result<(), StoreError> {
        let mut next = Vec::with_capacity(self.activities.len() + 1);
        next.push(activity);
        next.extend(self.activities.iter().cloned());
        save_json(self.backend_mut(), keys::ACTIVITIES, &next)?;
        self.activities = next;
        Ok(())
    }

    /// Remove every listing, persisting an empty array.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the write fails.
    pub fn clear_activities(&mut self) -> Result<(), StoreError> {
        save_json(self.backend_mut(), keys::ACTIVITIES, &[] as &[Activity])?;
        self.activities.clear();
        Ok(())
    }
}
