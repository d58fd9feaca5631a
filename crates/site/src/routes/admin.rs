//! Admin routes.
//!
//! Unlocking sets a flag in the caller's cookie session; every other admin
//! route requires it via [`RequireAdmin`].

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{RequireAdmin, is_admin_unlocked};
use crate::models::{Activity, Member, NewActivity, Stats, session_keys};
use crate::services::ActivityService;
use crate::state::AppState;

/// Admin unlock form.
#[derive(Deserialize)]
pub struct UnlockForm {
    #[serde(default)]
    pub secret: String,
}

/// Query for clearing listings.
#[derive(Debug, Deserialize)]
pub struct ClearQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct AdminStatus {
    pub unlocked: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(unlock))
        .route("/api/admin/logout", post(lock))
        .route("/api/admin/status", get(status))
        .route("/api/admin/members", get(members))
        .route(
            "/api/admin/activities",
            post(create_activity).delete(clear_activities),
        )
        .route("/api/admin/stats", put(update_stats))
        .route("/api/admin/describe", post(describe))
}

/// POST /api/admin/login
async fn unlock(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<UnlockForm>,
) -> Result<StatusCode, AppError> {
    if !state.admin().authenticate(&form.secret) {
        return Err(AppError::Unauthorized("wrong admin secret".to_string()));
    }

    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    session
        .insert(session_keys::ADMIN_UNLOCKED, true)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    tracing::info!("Admin area unlocked");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/admin/logout
async fn lock(session: Session) -> Result<StatusCode, AppError> {
    session
        .remove::<bool>(session_keys::ADMIN_UNLOCKED)
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/status
async fn status(session: Session) -> Json<AdminStatus> {
    Json(AdminStatus {
        unlocked: is_admin_unlocked(&session).await,
    })
}

/// GET /api/admin/members
async fn members(_: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Member>> {
    let store = state.store().lock().await;
    Json(store.members())
}

/// POST /api/admin/activities
async fn create_activity(
    _: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<NewActivity>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let mut store = state.store().lock().await;
    let activity = ActivityService::new(&mut store).add(input)?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// DELETE /api/admin/activities?confirm=true
async fn clear_activities(
    _: RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> Result<StatusCode, AppError> {
    if !query.confirm {
        return Err(AppError::BadRequest(
            "clearing all activities requires confirm=true".to_string(),
        ));
    }

    let mut store = state.store().lock().await;
    ActivityService::new(&mut store).clear()?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/stats
async fn update_stats(
    _: RequireAdmin,
    State(state): State<AppState>,
    Json(stats): Json<Stats>,
) -> Result<Json<Stats>, AppError> {
    let mut store = state.store().lock().await;
    store.update_stats(stats)?;
    Ok(Json(store.stats().clone()))
}

/// POST /api/admin/describe
async fn describe(
    _: RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, AppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let description = state.descriptions().generate_description(title).await;
    Ok(Json(DescribeResponse { description }))
}
