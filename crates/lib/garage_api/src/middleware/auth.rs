//! Authentication middleware — Bearer token extraction, token verification,
//! and the admin gate.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use garage_core::auth::jwt::authenticate_token;
use garage_core::auth::policy::authorize_admin;
use garage_core::models::auth::Identity;
use tracing::{debug, warn};

use crate::AppState;
use crate::error::AppError;

/// Verified caller, stored in request extensions by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

/// Pull the token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Axum middleware: extracts the bearer token, verifies it, and injects
/// [`AuthenticatedUser`] into request extensions.
///
/// No token → 401. Token present but invalid or expired → 403.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".into()))?;

    let identity = authenticate_token(token, state.config.jwt_secret.as_bytes()).ok_or_else(|| {
        debug!(path = %request.uri().path(), "rejected session token");
        AppError::Forbidden("Invalid or expired token".into())
    })?;

    request.extensions_mut().insert(AuthenticatedUser(identity));

    Ok(next.run(request).await)
}

/// Axum middleware layered inside [`require_auth`]: only administrators pass.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let allowed = request
        .extensions()
        .get::<AuthenticatedUser>()
        .is_some_and(|user| authorize_admin(&user.0));
    if !allowed {
        warn!(path = %request.uri().path(), "non-admin request to admin route");
        return Err(AppError::Forbidden("Administrator access required".into()));
    }
    Ok(next.run(request).await)
}
