//! Ocean Clean site library.
//!
//! The JSON API behind the OC ocean-cleanup site: member signup and login
//! against a file-backed roster, reward listings, headline stats, and an
//! admin area unlocked by a shared secret. Listing descriptions can be
//! drafted by Gemini.
//!
//! State lives in four named JSON blobs (see [`storage`]); [`store::SiteStore`]
//! loads them once and writes back after every mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gemini;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;

use axum::Router;

use state::AppState;

/// Build the application with its session layer, ready to serve.
///
/// Tracing and Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    routes::routes().layer(session_layer).with_state(state)
}
