//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                       - Health check
//!
//! # Public
//! GET    /api/stats                    - Headline stats
//! GET    /api/activities               - Reward listings, newest first
//!
//! # Member auth
//! POST   /api/auth/signup              - Register (does not log in)
//! POST   /api/auth/login               - Log in, replacing the site session
//! POST   /api/auth/logout              - Clear the site session
//! GET    /api/auth/me                  - Current member, if any
//!
//! # Admin (all but login/status require the unlocked admin area)
//! POST   /api/admin/login              - Unlock with the admin secret
//! POST   /api/admin/logout             - Lock again
//! GET    /api/admin/status             - Whether this browser is unlocked
//! GET    /api/admin/members            - Member roster
//! POST   /api/admin/activities         - Post a listing
//! DELETE /api/admin/activities?confirm=true - Remove every listing
//! PUT    /api/admin/stats              - Overwrite headline stats
//! POST   /api/admin/describe           - AI description for a title
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod activities;
pub mod admin;
pub mod auth;
pub mod stats;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(stats::router())
        .merge(activities::router())
        .merge(auth::router())
        .merge(admin::router())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
