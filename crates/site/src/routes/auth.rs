//! Member authentication routes.
//!
//! The logged-in member is site-wide state, not tied to the caller's
//! cookie: whoever logged in last is "the" current member.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::error::AppError;
use crate::models::Member;
use crate::services::AuthService;
use crate::services::auth::{LoginForm, SignupForm, prepare_signup};
use crate::state::AppState;

/// Current-member response.
#[derive(Debug, Serialize)]
pub struct CurrentMember {
    pub user: Option<Member>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
}

/// POST /api/auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    // Hash outside the lock; `register` re-checks the email under it.
    let user = prepare_signup(&form)?;

    let mut store = state.store().lock().await;
    let member = AuthService::new(&mut store).register(user)?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<Json<Member>, AppError> {
    let mut store = state.store().lock().await;
    let member = AuthService::new(&mut store).login(&form.email, &form.password)?;
    Ok(Json(member))
}

/// POST /api/auth/logout
async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut store = state.store().lock().await;
    AuthService::new(&mut store).logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
async fn me(State(state): State<AppState>) -> Json<CurrentMember> {
    let store = state.store().lock().await;
    Json(CurrentMember {
        user: store.session().cloned(),
    })
}
