//! Authentication request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use garage_core::auth::credentials;

use crate::AppState;
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{AuthUser, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::auth;

/// `POST /register` — create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let resp = auth::register(
        state.store.as_ref(),
        &body.name,
        &body.email,
        &body.password,
        &state.config.admin_email,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `POST /login` — authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        state.store.as_ref(),
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `GET /me` — the authenticated user, without password material.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<AuthUser>> {
    let me = credentials::get_user(state.store.as_ref(), user.0.id).await?;
    Ok(Json(me.into()))
}
