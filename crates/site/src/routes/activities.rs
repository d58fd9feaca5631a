//! Public listing route.

use axum::{Json, Router, extract::State, routing::get};

use crate::models::Activity;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/activities", get(list))
}

/// GET /api/activities
async fn list(State(state): State<AppState>) -> Json<Vec<Activity>> {
    let store = state.store().lock().await;
    Json(store.activities().to_vec())
}
