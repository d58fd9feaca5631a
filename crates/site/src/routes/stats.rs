//! Public stats route.

use axum::{Json, Router, extract::State, routing::get};

use crate::models::Stats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(show))
}

/// GET /api/stats
async fn show(State(state): State<AppState>) -> Json<Stats> {
    let store = state.store().lock().await;
    Json(store.stats().clone())
}
