//! User roster operations.

use ocean_clean_core::Email;

use super::{SiteStore, StoreError};
use crate::models::{Member, User};
use crate::storage::{keys, save_json};

impl SiteStore {
    /// All registered users, in signup order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Public profiles of all registered users, in signup order.
    #[must_use]
    pub fn members(&self) -> Vec<Member> {
        self.users.iter().map(User::profile).collect()
    }

    /// Find a user by exact email.
    #[must_use]
    pub fn find_user_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|u| &u.email == email)
    }

    /// Append a user and persist `oc_users`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email is already registered
    /// (the roster is left unchanged), or `StoreError::Storage` if the write
    /// fails.
    pub fn insert_user(&mut self, user: User) -> Result<(), StoreError> {
        if self.find_user_by_email(&user.email).is_some() {
            return Err(StoreError::Conflict(format!(
                "email {} is already registered",
                user.email
            )));
        }

        let mut next = self.users.clone();
        next.push(user);
        save_json(self.backend_mut(), keys::USERS, &next)?;
        self.users = next;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> User {
        User::new(
            name.to_owned(),
            Email::parse(email).unwrap(),
            "pw".to_owned(),
            "2026.10.16".to_owned(),
        )
    }

    #[test]
    fn test_insert_and_find() {
        let mut store = SiteStore::in_memory();
        store.insert_user(user("Kim", "kim@x.com")).unwrap();

        let found = store
            .find_user_by_email(&Email::parse("kim@x.com").unwrap())
            .unwrap();
        assert_eq!(found.name, "Kim");
        assert!(
            store
                .find_user_by_email(&Email::parse("lee@x.com").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_insert_duplicate_email_conflicts() {
        let mut store = SiteStore::in_memory();
        store.insert_user(user("Kim", "kim@x.com")).unwrap();

        let result = store.insert_user(user("Other Kim", "kim@x.com"));
        assert!(matches!(result, Err(StoreError::Conflict(_))));
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].name, "Kim");
    }

    #[test]
    fn test_members_keep_signup_order() {
        let mut store = SiteStore::in_memory();
        store.insert_user(user("Kim", "kim@x.com")).unwrap();
        store.insert_user(user("Lee", "lee@x.com")).unwrap();

        let names: Vec<_> = store.members().into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["Kim", "Lee"]);
    }
}
