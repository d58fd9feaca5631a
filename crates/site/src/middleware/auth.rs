//! Admin gate extractor.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// Extractor that requires the admin area to be unlocked in this browser.
///
/// Rejects with 401 and a JSON error body otherwise.
///
/// ```rust,ignore
/// async fn handler(_: RequireAdmin) -> impl IntoResponse { "unlocked" }
/// ```
pub struct RequireAdmin;

/// Rejection for [`RequireAdmin`].
pub struct AdminLocked;

impl IntoResponse for AdminLocked {
    fn into_response(self) -> Response {
        AppError::Unauthorized("admin area is locked".to_string()).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminLocked;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().ok_or(AdminLocked)?;

        if is_admin_unlocked(session).await {
            Ok(Self)
        } else {
            Err(AdminLocked)
        }
    }
}

/// Whether the admin unlock flag is set in `session`.
pub async fn is_admin_unlocked(session: &Session) -> bool {
    session
        .get::<bool>(session_keys::ADMIN_UNLOCKED)
        .await
        .ok()
        .flatten()
        .unwrap_or(false)
}
