//! The current-member session pointer.

use super::{SiteStore, StoreError};
use crate::models::Member;
use crate::storage::{keys, save_json};

impl SiteStore {
    /// The logged-in member, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Member> {
        self.session.as_ref()
    }

    /// Replace the session with `member` and persist `oc_session`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the write fails; the previous
    /// session is kept.
    pub fn set_session(&mut self, member: Member) -> Result<(), StoreError> {
        save_json(self.backend_mut(), keys::SESSION, &member)?;
        self.session = Some(member);
        Ok(())
    }

    /// Clear the session and remove `oc_session`. Clearing an empty session
    /// is a no-op apart from the (idempotent) removal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the removal fails.
    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.backend_mut().remove(keys::SESSION)?;
        self.session = None;
        Ok(())
    }
}
