//! Member authentication service.
//!
//! Signup, login, and logout against the member roster held by
//! [`SiteStore`]. There is one site-wide session: logging in replaces it,
//! logging out clears it.
//!
//! New passwords are stored as argon2 PHC strings. Roster entries carried
//! over from the first version of the site hold plaintext passwords; those
//! are still accepted and compared literally.

mod error;

pub use error::AuthError;

use argon2::{
    Algorithm, Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use tracing::instrument;

use ocean_clean_core::Email;

use crate::models::user::JOINED_AT_FORMAT;
use crate::models::{Member, User};
use crate::store::{SiteStore, StoreError};

/// Signup form data. Missing fields read as empty and fail validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Validate a signup form and build the user it describes.
///
/// Emails are taken verbatim, as login compares them exactly. The password
/// is hashed here, so callers can do this before locking the store.
///
/// # Errors
///
/// Returns `AuthError::Validation` if a field is empty or the passwords differ.
/// Returns `AuthError::InvalidEmail` if the email format is invalid.
pub fn prepare_signup(form: &SignupForm) -> Result<User, AuthError> {
    let name = form.name.trim();

    if name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(AuthError::Validation(
            "name, email, and password are required".to_owned(),
        ));
    }

    if form.password != form.confirm_password {
        return Err(AuthError::Validation("passwords do not match".to_owned()));
    }

    let email = Email::parse(&form.email)?;
    let password_hash = hash_password(&form.password)?;
    let joined_at = chrono::Local::now().format(JOINED_AT_FORMAT).to_string();

    Ok(User::new(name.to_owned(), email, password_hash, joined_at))
}

/// Authentication service over a borrowed store.
pub struct AuthService<'a> {
    store: &'a mut SiteStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(store: &'a mut SiteStore) -> Self {
        Self { store }
    }

    /// Register a new member from a signup form.
    ///
    /// The new member starts as a `ROOKIE` with `0kg` contributed and a join
    /// date of today (local time). Signup does not log the member in.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`prepare_signup`], or `AuthError::DuplicateEmail`
    /// if the email is already registered.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub fn signup(&mut self, form: &SignupForm) -> Result<Member, AuthError> {
        let user = prepare_signup(form)?;
        self.register(user)
    }

    /// Add a user built by [`prepare_signup`] to the roster.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::DuplicateEmail` if the email is already
    /// registered; the roster is left unchanged.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub fn register(&mut self, user: User) -> Result<Member, AuthError> {
        let member = user.profile();

        self.store.insert_user(user).map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::DuplicateEmail,
            other => AuthError::Store(other),
        })?;

        tracing::info!(user_id = %member.id, "Member registered");
        Ok(member)
    }

    /// Log in with email and password, replacing the current session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no user matches; the
    /// current session is left as it was.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, email: &str, password: &str) -> Result<Member, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let member = self
            .store
            .find_user_by_email(&email)
            .filter(|user| verify_password(password, &user.password))
            .map(User::profile)
            .ok_or_else(|| {
                tracing::info!("Login rejected");
                AuthError::InvalidCredentials
            })?;

        self.store.set_session(member.clone())?;

        tracing::info!(user_id = %member.id, "Member logged in");
        Ok(member)
    }

    /// Clear the session. Safe to call when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` if the session blob cannot be removed.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let previous = self.store.session().map(|m| m.id.clone());
        self.store.clear_session()?;

        if let Some(user_id) = previous {
            tracing::info!(%user_id, "Member logged out");
        }
        Ok(())
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check a password against a stored value.
///
/// Argon2 PHC strings are verified with argon2; anything else, including
/// `$`-prefixed strings naming another algorithm, is a plaintext record and
/// is compared literally. An empty stored value never matches.
fn verify_password(password: &str, stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }

    match PasswordHash::new(stored) {
        Ok(parsed) if Algorithm::try_from(parsed.algorithm).is_ok() => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        _ => {
            tracing::debug!("Verifying plaintext password record");
            password == stored
        }
    }
}
