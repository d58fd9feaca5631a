//! Reward listing management.

use thiserror::Error;
use tracing::instrument;

use crate::models::{Activity, NewActivity};
use crate::store::{SiteStore, StoreError};

/// Errors that can occur while managing listings.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// A required field is missing.
    #[error("{0}")]
    Validation(String),

    /// Store/persistence error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Listing service over a borrowed store.
pub struct ActivityService<'a> {
    store: &'a mut SiteStore,
}

impl<'a> ActivityService<'a> {
    #[must_use]
    pub fn new(store: &'a mut SiteStore) -> Self {
        Self { store }
    }

    /// Listings, newest first.
    #[must_use]
    pub fn list(&self) -> &[Activity] {
        self.store.activities()
    }

    /// Post a new listing at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Validation` if the title or reward amount is
    /// blank; the list is left unchanged.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub fn add(&mut self, input: NewActivity) -> Result<Activity, ActivityError> {
        if input.title.trim().is_empty() || input.price.trim().is_empty() {
            return Err(ActivityError::Validation(
                "title and reward amount are required".to_owned(),
            ));
        }

        let activity = Activity::from_new(input, chrono::Utc::now().timestamp_millis());
        self.store.prepend_activity(activity.clone())?;

        tracing::info!(activity_id = %activity.id, "Activity posted");
        Ok(activity)
    }

    /// Remove every listing. Confirmation is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Store` if the empty list cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), ActivityError> {
        let removed = self.store.activities().len();
        self.store.clear_activities()?;

        tracing::info!(removed, "Activities cleared");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::activity::DEFAULT_ACTIVITY_IMAGE;

    fn listing(title: &str, price: &str) -> NewActivity {
        NewActivity {
            title: title.to_owned(),
            price: price.to_owned(),
            ..NewActivity::default()
        }
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let mut store = SiteStore::in_memory();
        let mut service = ActivityService::new(&mut store);

        let first = service.add(listing("Aewol sweep", "10,000")).unwrap();
        let second = service.add(listing("Hamdeok sweep", "30,000")).unwrap();

        let list = service.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second.id);
        assert_eq!(list[1].id, first.id);
        assert!(list[0].created_at >= list[1].created_at);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_defaults_image() {
        let mut store = SiteStore::in_memory();
        let activity = ActivityService::new(&mut store)
            .add(listing("Seogwipo deep-sea sweep", "50,000"))
            .unwrap();
        assert_eq!(activity.img, DEFAULT_ACTIVITY_IMAGE);
    }

    #[test]
    fn test_add_requires_title_and_price() {
        let mut store = SiteStore::in_memory();
        let mut service = ActivityService::new(&mut store);

        assert!(matches!(
            service.add(listing("", "10,000")),
            Err(ActivityError::Validation(_))
        ));
        assert!(matches!(
            service.add(listing("Aewol sweep", "  ")),
            Err(ActivityError::Validation(_))
        ));
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_clear_empties_list() {
        let mut store = SiteStore::in_memory();
        let mut service = ActivityService::new(&mut store);
        service.add(listing("Aewol sweep", "10,000")).unwrap();

        service.clear().unwrap();
        assert!(service.list().is_empty());

        // Clearing an empty list is fine.
        service.clear().unwrap();
    }
}
